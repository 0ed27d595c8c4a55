mod common;
use common::*;

#[test]
fn test_read_data_in_order() {
    let source = r#"
10 READ A,B
20 READ C
30 PRINT A,B,C
40 DATA 1,2
50 END
60 DATA -3
"#;
    assert_eq!(exec(source), "12-3\n");
}

#[test]
fn test_no_data() {
    let source = "10 READ A\n20 READ B\n30 DATA 1\n40 END";
    assert_eq!(exec(source), "NO DATA IN 20\n");
}

#[test]
fn test_for_step() {
    let source = "10 FOR I=1 TO 5 STEP 2\n20 PRINT I\n30 NEXT I\n40 PRINT I\n50 END";
    assert_eq!(exec(source), "1\n3\n5\n7\n");
    let source = "10 FOR X=0 TO 1 STEP 0.5\n20 PRINT X,\n30 NEXT X\n40 PRINT\n50 END";
    assert_eq!(exec(source), "00.51\n");
}

#[test]
fn test_nested_for() {
    let source = r#"
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X,Y
40 NEXT Y
50 NEXT X
60 END
"#;
    assert_eq!(exec(source), "15\n16\n25\n26\n");
}

#[test]
fn test_end_placement() {
    assert_eq!(exec("10 END\n20 END"), "END IS NOT LAST IN 20\n");
    assert_eq!(exec("10 END\n20 PRINT 1"), "END IS NOT LAST IN 20\n");
    assert_eq!(exec("10 PRINT 1"), "NO END INSTRUCTION\n");
    assert_eq!(exec("10 END\n20 REM\n30 DIM A(3)\n40 DEF FNA(X)=X"), "");
}

#[test]
fn test_gosub() {
    let source = r#"
10 GOSUB 100
20 PRINT "C"
30 STOP
100 GOSUB 200
110 PRINT "B"
120 RETURN
200 PRINT "A"
210 RETURN
220 END
"#;
    assert_eq!(exec(source), "A\nB\nC\n");
}

#[test]
fn test_illegal_return() {
    assert_eq!(exec("10 RETURN\n20 END"), "ILLEGAL RETURN IN 10\n");
}

#[test]
fn test_goto_and_stop() {
    let source = "10 GOTO 30\n20 PRINT \"NO\"\n30 PRINT \"YES\"\n40 STOP\n50 PRINT \"NO\"\n60 END";
    assert_eq!(exec(source), "YES\n");
    assert_eq!(exec("10 GOTO 99\n20 END"), "UNDEFINED NUMBER IN 10\n");
}

#[test]
fn test_print() {
    assert_eq!(exec("10 PRINT \"A=\" 1, \"B\"\n20 END"), "A=1B\n");
    assert_eq!(exec("10 PRINT 1,\n20 PRINT 2\n30 END"), "12\n");
    assert_eq!(exec("10 PRINT 1,\n20 END"), "1");
    assert_eq!(exec("10 PRINT\n20 END"), "\n");
    assert_eq!(exec("10 PRINT \"HELLO, WORLD\"\n20 END"), "HELLO, WORLD\n");
}

#[test]
fn test_def() {
    let source = r#"
10 DEF FNA(X)=X+Y
20 LET Y=10
30 LET X=1
40 PRINT FNA(5),X
50 DEF FNB(Z)=FNA(Z)*2
60 PRINT FNB(1)
70 END
"#;
    assert_eq!(exec(source), "151\n22\n");
}

#[test]
fn test_later_def_wins() {
    let source = "10 DEF FNA(X)=1\n20 PRINT FNA(0)\n30 DEF FNA(X)=2\n40 END";
    assert_eq!(exec(source), "2\n");
}

#[test]
fn test_duplicate_line_number() {
    assert_eq!(
        exec("10 PRINT 1\n10 END"),
        "ILLEGAL LINE NUMBER IN 10 AT LINE 2; DUPLICATE LINE NUMBER\n"
    );
}

#[test]
fn test_lines_run_in_number_order() {
    let source = "30 END\n20 PRINT 2\n10 PRINT 1";
    assert_eq!(exec(source), "1\n2\n");
}
