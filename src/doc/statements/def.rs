/*!
# `DEF FN<letter>(<parameter>)=<expression>`

## Purpose
Defines a one line numeric function.

## Remarks
The function name is `FN` followed by a single letter, so a program may
define up to 26 functions, `FNA` through `FNZ`. Definitions are collected
before the program runs. If the same letter is defined twice, the higher
numbered line wins.

The parameter is a simple variable name. While the body is evaluated it
holds the argument of the call. A variable of the same name elsewhere in
the program is not changed by the call. Every other variable in the body
refers to the program's variable of that name.

A function may call other functions, but calls nested more than 128 deep
stop the program with `ILLEGAL FORMULA`.

Calling a letter that was never defined is an `UNDEFINED FUNCTION` error.

## Example
```text
10 DEF FNS(X)=X*X
20 LET X=3
30 PRINT FNS(X+1),X
40 END
RUN
163
```

*/
