/*!
# `END`

## Purpose
Marks the end of the program.

## Remarks
Every program must have exactly one `END`, and it must be the last
executable line. Only `DATA`, `DEF`, `DIM` and `REM` may follow it. A
program without `END` fails with `NO END INSTRUCTION`. A statement
after it fails with `END IS NOT LAST`. Both checks happen before any
statement runs.

Reaching `END` stops the program normally.

## Example
```text
10 PRINT "HELLO"
20 END
30 REM THIS IS ALLOWED
RUN
HELLO
```

*/
