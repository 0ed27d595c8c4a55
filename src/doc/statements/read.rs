/*!
# `READ <variable>[,<variable>...]`

## Purpose
Assigns numbers from `DATA` statements to variables.

## Remarks
Each variable takes the next number in the queue collected from all the
`DATA` lines. When the queue is empty the program stops with `NO DATA`.

## Example
```text
10 READ A,B
20 PRINT A*B
30 GOTO 10
40 DATA 2,3,4,5
50 END
RUN
6
20
NO DATA IN 10
```

*/
