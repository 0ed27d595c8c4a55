/*!
# `STOP`

## Purpose
Stops the program.

## Remarks
`STOP` may be used anywhere before `END` and any number of times.
It ends the run just as reaching `END` does.

## Example
```text
10 PRINT "ONE"
20 STOP
30 PRINT "TWO"
40 END
RUN
ONE
```

*/
