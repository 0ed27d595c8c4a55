/*!
# `PRINT [<item>[,<item>...]][,]`

## Purpose
Prints labels and the values of expressions.

## Remarks
An item is a label in quotes, an expression, or a label immediately
followed by an expression. Items are printed one after another without
spaces. A line holds at most 75 characters; anything beyond that is cut.

A trailing comma keeps the next `PRINT` on the same line. `PRINT` alone
prints an empty line.

Whole numbers print without a decimal point. Very large and very small
numbers print with an exponent, such as `1E+21`.

## Example
```text
10 LET X=2.5
20 PRINT "X IS "X,
30 PRINT " TWICE "2*X
40 PRINT
50 END
RUN
X IS 2.5 TWICE 5

```

*/
