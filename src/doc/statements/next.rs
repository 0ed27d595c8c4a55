/*!
# `NEXT <variable>`

## Purpose
Closes a `FOR` loop.

## Remarks
The step is added to the variable. If the result has not passed the
limit, execution continues at the line after the matching `FOR`.
Otherwise the loop ends and execution continues after the `NEXT`.

`NEXT` for a variable with no active loop is `NOT MATCH WITH FOR`.
Loops started inside the matching loop and still active are forgotten.

## Example
```text
10 FOR I=3 TO 1 STEP -1
20 PRINT I,
30 NEXT I
40 END
RUN
321
```

*/
