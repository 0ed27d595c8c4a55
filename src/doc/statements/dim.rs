/*!
# `DIM <variable>(<bound>[,<bound>])[,...]`

## Purpose
Declares the size of lists and tables.

## Remarks
Subscripts start at 0, so `DIM A(20)` makes a list of 21 elements. Bounds
must be integer constants between 0 and 1500. A fractional bound is an
`ILLEGAL CONSTANT`; a negative or larger bound is `DIMENSION TOO LARGE`.

A list or table that is used without a `DIM` is given a bound of 10 on
each subscript. Every element starts as 0.

Lists, tables and simple variables are separate. `A`, `A(1)` and `A(1,1)`
may all be used in the same program without interfering.

`DIM` is applied before the program runs, no matter where it appears.

## Example
```text
10 DIM A(20),B(3,4)
20 LET A(20)=1
30 LET B(3,4)=A(20)+1
40 PRINT A(19),B(3,4)
50 END
RUN
02
```

*/
