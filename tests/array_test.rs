mod common;
use common::*;

#[test]
fn test_dim_bounds() {
    let ok = "10 DIM A(5)\n20 LET A(5)=1\n30 PRINT A(5),A(0)\n40 END";
    assert_eq!(exec(ok), "10\n");
    let over = "10 DIM A(5)\n20 LET A(6)=1\n30 END";
    assert_eq!(exec(over), "SUBSCRIPT ERROR IN 20\n");
    let fraction = "10 DIM A(5)\n20 LET A(2.5)=1\n30 END";
    assert_eq!(
        exec(fraction),
        "ILLEGAL CONSTANT IN 20; SUBSCRIPT IS NOT AN INTEGER\n"
    );
    let negative = "10 LET A(-1)=1\n20 END";
    assert_eq!(exec(negative), "SUBSCRIPT ERROR IN 10\n");
}

#[test]
fn test_default_bounds() {
    let list = "10 LET A(10)=1\n20 LET A(11)=1\n30 END";
    assert_eq!(exec(list), "SUBSCRIPT ERROR IN 20\n");
    let table = "10 LET B(10,10)=7\n20 PRINT B(10,10),B(0,0)\n30 LET B(1,11)=1\n40 END";
    assert_eq!(exec(table), "70\nSUBSCRIPT ERROR IN 30\n");
}

#[test]
fn test_dim_limits() {
    assert_eq!(
        exec("10 DIM A(1501)\n20 END"),
        "DIMENSION TOO LARGE IN 10\n"
    );
    assert_eq!(exec("10 DIM B(1500,2)\n20 LET B(1500,2)=1\n30 END"), "");
    assert_eq!(
        exec("10 DIM A(2.5)\n20 END"),
        "ILLEGAL CONSTANT IN 10; DIMENSION IS NOT AN INTEGER\n"
    );
}

#[test]
fn test_dim_applies_before_run() {
    let source = "10 LET A(15)=3\n20 PRINT A(15)\n30 DIM A(20)\n40 END";
    assert_eq!(exec(source), "3\n");
}

#[test]
fn test_separate_namespaces() {
    let source = r#"
10 LET A=1
20 LET A(1)=2
30 LET A(1,1)=3
40 PRINT A,A(1),A(1,1)
50 END
"#;
    assert_eq!(exec(source), "123\n");
}

#[test]
fn test_subscript_expressions() {
    let source = r#"
10 DIM T(3,3)
20 FOR I=0 TO 3
30 FOR J=0 TO 3
40 LET T(I,J)=I*10+J
50 NEXT J
60 NEXT I
70 LET K=2
80 PRINT T(K+1,-1+K),T(T(0,1),3)
90 END
"#;
    assert_eq!(exec(source), "3113\n");
}

#[test]
fn test_read_into_list() {
    let source = r#"
10 FOR I=1 TO 3
20 READ L(I)
30 NEXT I
40 PRINT L(1)+L(2)+L(3)
50 DATA 4,5,6
60 END
"#;
    assert_eq!(exec(source), "15\n");
}

#[test]
fn test_undeclared_list() {
    assert_eq!(eval("Q(1)"), "UNDECLARED VARIABLE IN 10; Q\n");
}
