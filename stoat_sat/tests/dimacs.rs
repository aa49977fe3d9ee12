use stoat_sat::{
    builder::dimacs::{parse_dimacs, ParserInfo},
    config::Config,
    context::Context,
    reports::Report,
    types::err::ParseError,
};

#[derive(Debug, Default)]
struct ParseCase {
    header: Option<(u32, u32)>,
    clauses: Vec<Vec<i32>>,
}

fn parse(text: &str) -> Result<ParseCase, ParseError> {
    let mut case = ParseCase::default();
    parse_dimacs(
        text.as_bytes(),
        |atoms, clauses| case.header = Some((atoms, clauses)),
        |literals| case.clauses.push(literals.to_vec()),
    )?;
    Ok(case)
}

mod errors {
    use super::*;

    #[test]
    fn empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dimacs input format - all lines are either empty or commented out"
        );
    }

    #[test]
    fn comments_only() {
        assert_eq!(parse("c foo\n\nc bar\n").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn bad_header_prefix() {
        let err = parse("p cn 2 3").unwrap_err();
        assert_eq!(
            err.to_string(),
            "1: Invalid dimacs input format, expecting a line prefix 'p cnf ' but got 'p cn 2 3'"
        );
    }

    #[test]
    fn bad_header_counts() {
        let err = parse("c foo\n  p cnf -3 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "2: Invalid dimacs input format, expecting a header 'p cnf <variables: unsigned int> \
             <clauses: unsigned int>' but got 'p cnf -3 2'"
        );
    }

    #[test]
    fn junk_at_header_end() {
        let err = parse("p cnf 2 3 4\n1 2 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "1: Invalid dimacs input format, junk after header '4'"
        );
    }

    #[test]
    fn atom_count_overflow() {
        let err = parse("p cnf 2147483648 3\n1 2 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "1: Invalid dimacs input format, expecting a header 'p cnf <variables: unsigned int> \
             <clauses: unsigned int>' but got 'p cnf 2147483648 3'"
        );
    }

    #[test]
    fn atom_count_almost_overflow() {
        let case = parse("p cnf 2147483647 3\n1 2 0").unwrap();
        assert_eq!(case.header, Some((2147483647, 3)));
    }

    #[test]
    fn zero_in_clause_middle() {
        let err = parse("\n p cnf 10 20\n 1 -2 0\n 2 0 3 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "4: 0 should be only at the end for the line '2 0 3 0'"
        );
    }

    #[test]
    fn missing_zero_at_clause_end() {
        let err = parse("p      cnf  10  20\n 1 -2 3\n 2 2 3 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "2: Missing 0 at the end of the line for line '1 -2 3'"
        );
    }
}

mod reading {
    use super::*;

    const FOUR_CLAUSES: &str = "
        p cnf 4 5
        1 -2 3 0
        2 3 0
        -1 2 -3 4 0
        1 -2 -3 -4 0
    ";

    #[test]
    fn callbacks_receive_the_formula() {
        let case = parse(FOUR_CLAUSES).unwrap();
        assert_eq!(case.header, Some((4, 5)));
        assert_eq!(
            case.clauses,
            vec![
                vec![1, -2, 3],
                vec![2, 3],
                vec![-1, 2, -3, 4],
                vec![1, -2, -3, -4]
            ]
        );
    }

    #[test]
    fn context_reads_the_formula() {
        let mut ctx = Context::from_config(Config::default());
        let info = ctx.read_dimacs(FOUR_CLAUSES.as_bytes()).unwrap();
        assert_eq!(
            info,
            ParserInfo {
                expected_atoms: 4,
                expected_clauses: 5,
                added_clauses: 4,
            }
        );
        assert_eq!(ctx.atom_db.count(), 5);
        assert_eq!(ctx.clause_db.count(), 4);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn round_trip_preserves_satisfiability() {
        for text in [
            FOUR_CLAUSES,
            "p cnf 1 2\n1 0\n-1 0\n",
            "p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n",
        ] {
            let mut original = Context::from_config(Config::default());
            original.read_dimacs(text.as_bytes()).unwrap();

            let emitted = original.as_dimacs();
            let mut reread = Context::from_config(Config::default());
            reread.read_dimacs(emitted.as_bytes()).unwrap();

            assert_eq!(original.solve(), reread.solve());
        }
    }
}
