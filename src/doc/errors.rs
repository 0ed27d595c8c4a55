/*!
# Errors

A program stops at the first error. The message starts with one of the
names below, then the BASIC line number when there is one. Errors found
while reading the program add the line and columns of the source file.
Some messages end with a short explanation after a semicolon.

```text
SUBSCRIPT ERROR IN 30
ILLEGAL FORMULA IN 20 AT LINE 2 (9..12)
INCORRECT FORMAT IN 10 AT LINE 1 (11..15); EXPECTED TO
INCORRECT FORMAT IN 40; STEP IS ZERO
```

## While reading the program

| Message | Cause |
|---|---|
| `ILLEGAL CONSTANT` | a number with more than nine digits, or something other than a number in `DATA` or `DIM` |
| `ILLEGAL FORMULA` | an expression that can't be understood, an unknown word or character, unbalanced parentheses |
| `ILLEGAL RELATION` | `IF` without one of `= <> < <= > >=` |
| `ILLEGAL LINE NUMBER` | a line number that is missing, fractional, negative, above 99999 or used twice |
| `ILLEGAL INSTRUCTION` | a line that doesn't start with one of the fifteen statements |
| `ILLEGAL VARIABLE` | a variable name that isn't a letter optionally followed by a digit |
| `INCORRECT FORMAT` | a statement missing a required part such as `THEN` or `TO`, or an unterminated string |

## Before the program runs

| Message | Cause |
|---|---|
| `NO END INSTRUCTION` | the program has no `END` |
| `END IS NOT LAST` | a statement other than `DATA`, `DEF`, `DIM` or `REM` follows `END` |
| `ILLEGAL CONSTANT` | a fractional `DIM` bound |
| `DIMENSION TOO LARGE` | a `DIM` bound above 1500 |

## While the program runs

| Message | Cause |
|---|---|
| `NO DATA` | `READ` after every `DATA` number was used |
| `UNDEFINED FUNCTION` | a call to an `FN` letter that has no `DEF` |
| `UNDEFINED NUMBER` | `GOTO`, `GOSUB` or `IF` to a line that doesn't exist |
| `UNDECLARED VARIABLE` | using a variable, list or table before giving it a value |
| `SUBSCRIPT ERROR` | a subscript below 0 or above the bound |
| `ILLEGAL CONSTANT` | a fractional subscript |
| `ILLEGAL RETURN` | `RETURN` without a `GOSUB` |
| `TOO MANY LOOPS` | more than 26 `FOR` loops active at once |
| `NOT MATCH WITH FOR` | `NEXT` for a variable with no active `FOR` |
| `INCORRECT FORMAT` | a `FOR` with a `STEP` of zero |
| `ILLEGAL FORMULA` | user functions nested more than 128 deep |
| `CUT PROGRAM OR DIMS` | more than 65535 `GOSUB` calls without a `RETURN` |
| `BREAK` | the program was stopped with CTRL-C or ran past `--max-steps` |

*/
