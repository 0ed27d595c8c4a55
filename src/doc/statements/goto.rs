/*!
# `GOTO <line number>`

## Purpose
Move execution to the specified line number.

## Remarks
The line must exist or the program stops with `UNDEFINED NUMBER`.

## Example
```text
10 GOTO 30
20 PRINT "SKIPPED"
30 PRINT "HELLO"
40 END
RUN
HELLO
```

*/
