/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Statements execute until a `NEXT I` statement.
On subsequent iterations, the variable I gets 2 added to it.
If the result passes 7 the loop ends.
Otherwise the statements get executed again.
When `STEP` is omitted it is 1.
A negative `STEP` counts down.

x, y, and z are evaluated once, when the `FOR` executes.
A `STEP` of zero is an `INCORRECT FORMAT` error.

The first iteration always executes even if starting past the end.

Up to 26 loops may be active at once. Running a `FOR` for a variable
that already has an active loop restarts that loop and forgets any
loops started inside it.

## Example 1
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I,
30 NEXT I
40 END
RUN
1357
```

## Example 2
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X,Y
40 NEXT Y
50 NEXT X
60 END
RUN
15
16
25
26
```

*/
