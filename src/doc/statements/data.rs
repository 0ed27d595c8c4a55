/*!
# `DATA <number>[,<number>...]`

## Purpose
Supplies the numbers that `READ` assigns to variables.

## Remarks
Every `DATA` line in the program is collected before the first statement
runs, in line number order, into a single queue. Where a `DATA` line sits
makes no difference to when its numbers become available.

Only numeric constants are allowed. A constant may have a leading sign.
Anything else, such as a variable or an expression, is an
`ILLEGAL CONSTANT`.

`DATA` may appear after `END`.

## Example
```text
10 READ A,B,C
20 PRINT A+B+C
30 DATA 1,2
40 END
50 DATA -3
RUN
0
```

*/
