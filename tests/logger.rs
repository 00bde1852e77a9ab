use stageboost::prelude::*;


/// Tests for `Logger`.
#[cfg(test)]
pub mod logger_tests {
    use super::*;

    #[test]
    fn every_round_is_logged() {
        let sample = synthetic::staircase(1).unwrap();
        let tree = RegressionTreeBuilder::new()
            .max_depth(1)
            .build()
            .unwrap();
        let fitter = StagewiseFitter::init(&sample)
            .rounds(12);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let history = Logger::new(fitter, tree, &sample)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();
        assert_eq!(history.len(), 13);


        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Round,TrainL2,TrainL1,Time"));

        let rows = lines.collect::<Vec<_>>();
        assert_eq!(rows.len(), 13);

        let n_sample = sample.shape().0 as f64;
        for (round, row) in rows.into_iter().enumerate() {
            let cells = row.split(',').collect::<Vec<_>>();
            assert_eq!(cells.len(), 4);
            assert_eq!(cells[0].parse::<usize>().unwrap(), round);

            let l2 = cells[1].parse::<f64>().unwrap();
            let expected = history.get(round).unwrap().squared_loss() / n_sample;
            assert!((l2 - expected).abs() < 1e-9);
        }
    }


    #[test]
    fn invalid_rounds_fail_before_logging() {
        let sample = synthetic::staircase(1).unwrap();
        let tree = RegressionTreeBuilder::new().build().unwrap();
        let fitter = StagewiseFitter::init(&sample).rounds(0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let result = Logger::new(fitter, tree, &sample)
            .print_every(usize::MAX)
            .run(&path);
        assert!(matches!(result, Err(StageError::InvalidInput(_))));
        assert!(!path.exists());
    }


    #[test]
    fn sample_must_match_the_booster() {
        let train = synthetic::staircase(1).unwrap();
        let other = Sample::new(vec![0.0, 1.0], vec![2.0, 4.0]).unwrap();
        let tree = RegressionTreeBuilder::new().build().unwrap();
        let fitter = StagewiseFitter::init(&train).rounds(3);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let result = Logger::new(fitter, tree, &other)
            .print_every(usize::MAX)
            .run(&path);
        assert!(matches!(result, Err(StageError::InvalidInput(_))));
        assert!(!path.exists());
    }
}
