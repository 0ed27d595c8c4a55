/*!
# `GOSUB <line number>`

## Purpose
Remember the following line and move execution to the specified line number.

## Remarks
`RETURN` will resume execution at the remembered line.
Subroutines may call other subroutines.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 STOP
100 PRINT "HELLO ",
110 RETURN
120 END
RUN
HELLO WORLD
```

*/
