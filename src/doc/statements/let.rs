/*!
# `LET <variable>=<expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is required. The variable may be simple, such as `X` or
`X1`, an element of a list, `A(I)`, or of a table, `B(I,J)`.

A subscript must be a whole number within the bounds of the list or
table. A fractional subscript is an `ILLEGAL CONSTANT` and one out of
bounds is a `SUBSCRIPT ERROR`.

## Example
```text
10 LET A=2
20 LET B(A,A+1)=A^3
30 PRINT B(2,3)
40 END
RUN
8
```

*/
