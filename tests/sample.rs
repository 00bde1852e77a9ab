use stageboost::prelude::*;
use stageboost::sample::synthetic::{STEPS, STEP_WIDTH};

use std::io::BufReader;


/// Tests for `Sample`, `SampleReader`, and the synthetic sample.
#[cfg(test)]
pub mod sample_tests {
    use super::*;

    fn read(text: &str, has_header: bool, feature: Option<&str>, target: Option<&str>)
        -> Result<Sample>
    {
        let reader = BufReader::new(text.as_bytes());
        Sample::from_reader(reader, has_header, feature, target)
    }


    #[test]
    fn csv_without_header() {
        let sample = read("0,1.5\n1, 2.5\n2,-3\n", false, None, None)
            .unwrap();
        assert_eq!(sample.shape(), (3, 1));
        assert_eq!(sample.feature(), &[0.0, 1.0, 2.0]);
        assert_eq!(sample.target(), &[1.5, 2.5, -3.0]);
        assert_eq!(sample.feature_name(), "x");
        assert_eq!(sample.target_name(), "y");
    }


    #[test]
    fn csv_with_named_columns() {
        let text = "id,loan,income\n0,10,3\n1,20,4\n\n2,30,5\n";
        let sample = read(text, true, Some("income"), Some("loan"))
            .unwrap();
        assert_eq!(sample.feature(), &[3.0, 4.0, 5.0]);
        assert_eq!(sample.target(), &[10.0, 20.0, 30.0]);
        assert_eq!(sample.feature_name(), "income");
        assert_eq!(sample.target_name(), "loan");
    }


    #[test]
    fn csv_errors() {
        let missing = read("a,b\n1,2\n", true, Some("c"), None);
        assert!(matches!(missing, Err(StageError::InvalidInput(_))));

        let parse = read("a,b\n1,2\n3,oops\n", true, None, None);
        match parse {
            Err(StageError::Parse { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "oops");
            },
            other => panic!("unexpected result: {other:?}"),
        }

        let empty = read("a,b\n", true, None, None);
        assert!(matches!(empty, Err(StageError::InvalidInput(_))));

        let short = read("1\n", false, None, None);
        assert!(matches!(short, Err(StageError::InvalidInput(_))));
    }


    #[test]
    fn reader_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        std::fs::write(&path, "x,y\n0,1\n1,3\n").unwrap();

        let sample = SampleReader::new()
            .file(&path)
            .has_header(true)
            .feature("x")
            .target("y")
            .read()
            .unwrap();
        assert_eq!(sample.feature(), &[0.0, 1.0]);
        assert_eq!(sample.target(), &[1.0, 3.0]);
        assert_eq!(sample.target_mean(), 2.0);

        let missing = SampleReader::new()
            .file(dir.path().join("missing.csv"))
            .read();
        assert!(matches!(missing, Err(StageError::Io(_))));
    }


    #[test]
    fn staircase_is_seeded() {
        let a = synthetic::staircase(42).unwrap();
        let b = synthetic::staircase(42).unwrap();
        let c = synthetic::staircase(43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.target(), c.target());
    }


    #[test]
    fn staircase_stays_in_its_steps() {
        let sample = synthetic::staircase(0).unwrap();
        assert_eq!(sample.shape().0, STEP_WIDTH * STEPS.len());

        for (i, (&x, &y)) in sample.feature().iter()
            .zip(sample.target())
            .enumerate()
        {
            assert_eq!(x, i as f64);
            let (low, high) = STEPS[i / STEP_WIDTH];
            assert!((low..high).contains(&y), "y[{i}] = {y}");
        }
    }
}
