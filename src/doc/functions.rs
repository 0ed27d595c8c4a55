/*!
# Functions

Functions take one argument in parentheses and may be used anywhere an
expression is allowed.

| Function | Result |
|---|---|
| `SIN(X)` | sine of X, in radians |
| `COS(X)` | cosine of X, in radians |
| `TAN(X)` | tangent of X, in radians |
| `ATN(X)` | arctangent of X, in radians |
| `EXP(X)` | e raised to the power X |
| `ABS(X)` | absolute value of X |
| `LOG(X)` | natural logarithm of the absolute value of X |
| `SQR(X)` | square root of the absolute value of X |
| `INT(X)` | X with its fraction removed, so `INT(-2.7)` is -2 |
| `RND(X)` | a random number from 0 up to but not including 1 |

The argument of `RND` is evaluated but otherwise ignored.
Every run produces a different sequence.

Programs may define their own functions with `DEF`.

```text
10 DEF FNH(X)=SQR(X*X+9)
20 PRINT FNH(4)
30 END
RUN
5
```

Arithmetic that has no finite answer does not stop the program.
Dividing by zero gives `INFINITY` and `0/0` gives `NAN`.

*/
