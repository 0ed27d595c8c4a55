/*!
# `IF x <relation> y THEN <line number>`
Where x and y are expressions.

## Purpose
Move execution to the specified line number when the relation holds.

## Remarks
The relations are `=`, `<>`, `<`, `<=`, `>` and `>=`. They may also be
spelled `EQU`, `NQU`, `LSS`, `LQU`, `GRT` and `GQU`. A missing relation
is an `ILLEGAL RELATION`.

When the relation does not hold, execution continues with the next line.

## Example
```text
10 LET N=0
20 LET N=N+1
30 IF N LSS 3 THEN 20
40 PRINT N
50 END
RUN
3
```

*/
