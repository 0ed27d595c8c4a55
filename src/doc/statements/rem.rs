/*!
# `REM <comment>`

## Purpose
Adds a remark to the program.

## Remarks
Everything after `REM` on the line is ignored. `REM` may appear after
`END`.

## Example
```text
10 REM COMPUTE NOTHING AT ALL
20 END
```

*/
