/*!
# Introductory Tutorial for Dartmouth BASIC

BASIC was written at Dartmouth College in 1964 so that students could
use a computer without first learning how one works. This crate runs
programs written for that first version of the language.

A program is a text file. Each line starts with a line number and holds
exactly one instruction. Put the following in a file named `hello.bas`.

```text
10 PRINT "HELLO WORLD"
20 END
```

Then run it.

<pre><code>&nbsp;$ basic hello.bas
&nbsp;HELLO WORLD
</code></pre>

Lines may be typed in any order. The program always runs in line number
order, starting from the lowest. It is customary to number by tens,
which leaves room to insert lines later. Line numbers go from 0 to 99999.
Upper and lower case are the same, and spaces between the parts of an
instruction are ignored.

Every program must end with `END`. Let's do some arithmetic.

```text
10 LET A=2
20 LET B=3
30 PRINT A+B*2
40 END
```

This prints `8`, since `*` is applied before `+`. The operators are `+`,
`-`, `*`, `/` and `^` for raising to a power. Parentheses group as usual.
All numbers are floating point.

Variable names are a single letter, optionally followed by a digit: `X`,
`X1`, `Z9`. A variable must be given a value with `LET` or `READ`
before it is used, otherwise the program stops with
`UNDECLARED VARIABLE`.

Here is a loop that prints a small table of squares.

```text
10 FOR I=1 TO 5
20 PRINT "THE SQUARE OF "I" IS "I*I
30 NEXT I
40 END
```

When something is wrong, the program stops and a single message names
the problem and the line.

<pre><code>&nbsp;$ basic broken.bas
&nbsp;<b>UNDEFINED NUMBER IN 30</b>
</code></pre>

Errors found while reading the program also show where in the file the
problem is. The source line and columns are counted in the file itself,
not by BASIC line number.

<pre><code>&nbsp;$ basic typo.bas
&nbsp;<b>ILLEGAL FORMULA IN 20 AT LINE 2 (9..12)</b>
</code></pre>

Stop a running program with CTRL-C. The command line also accepts
`--max-steps N` to stop a program after N statements, `--width N` to
change the longest line a `PRINT` may produce, `--list` to show the
program as it was understood instead of running it, and `--verbose` to
log what the interpreter is doing.

The remainder of this manual is reference material covering the
statements, the functions and the error messages.

*/
