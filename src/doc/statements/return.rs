/*!
# `RETURN`

## Purpose
Resumes execution at the line after the most recent `GOSUB`.

## Remarks
`RETURN` without a pending `GOSUB` is an `ILLEGAL RETURN`.

## Example
```text
10 GOSUB 100
20 PRINT "BACK"
30 STOP
100 PRINT "AWAY"
110 RETURN
120 END
RUN
AWAY
BACK
```

*/
