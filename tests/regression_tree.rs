use stageboost::prelude::*;


/// Tests for `RegressionTree`.
#[cfg(test)]
pub mod rtree_tests {
    use super::*;

    fn tree(depth: usize) -> RegressionTree {
        RegressionTreeBuilder::new()
            .max_depth(depth)
            .build()
            .unwrap()
    }


    #[test]
    fn depth_zero_is_rejected() {
        let result = RegressionTreeBuilder::new()
            .max_depth(0)
            .build();
        assert!(matches!(result, Err(StageError::InvalidInput(_))));
    }


    #[test]
    fn default_is_a_stump() {
        let tree = RegressionTreeBuilder::default().build().unwrap();
        assert_eq!(tree.max_depth(), 1);
    }


    #[test]
    fn unsorted_features_are_handled() {
        let x = vec![3.0, 0.0, 2.0, 1.0];
        let r = vec![4.0, -2.0, 4.0, -2.0];
        let sample = Sample::new(x.clone(), r.clone()).unwrap();

        let h = tree(1).produce(&sample, &r);
        assert_eq!(h.thresholds(), vec![1.5]);
        assert_eq!(h.predict_all(&x), r);
    }


    #[test]
    fn deeper_trees_have_more_leaves() {
        let x = (0..8).map(|i| i as f64).collect::<Vec<_>>();
        let r = vec![0.0, 0.0, 4.0, 4.0, 8.0, 8.0, 12.0, 12.0];
        let sample = Sample::new(x.clone(), r.clone()).unwrap();

        let stump = tree(1).produce(&sample, &r);
        assert_eq!(stump.n_leaves(), 2);
        assert_eq!(stump.depth(), 1);

        let h = tree(2).produce(&sample, &r);
        assert_eq!(h.n_leaves(), 4);
        assert_eq!(h.depth(), 2);
        assert!(h.as_stump().is_none());
        assert_eq!(h.predict_all(&x), r);
    }


    #[test]
    fn pure_nodes_are_not_split() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let r = vec![-1.0, -1.0, 1.0, 1.0];
        let sample = Sample::new(x.clone(), r.clone()).unwrap();

        let h = tree(5).produce(&sample, &r);
        assert_eq!(h.depth(), 1);
        assert_eq!(h.as_stump(), Some((1.5, -1.0, 1.0)));
    }


    #[test]
    fn equal_features_give_a_single_leaf() {
        let x = vec![2.0, 2.0, 2.0];
        let r = vec![1.0, 2.0, 6.0];
        let sample = Sample::new(x.clone(), r.clone()).unwrap();

        let h = tree(3).produce(&sample, &r);
        assert_eq!(h.depth(), 0);
        assert_eq!(h.n_leaves(), 1);
        assert_eq!(h.predict_all(&x), vec![3.0, 3.0, 3.0]);
    }


    #[test]
    fn unseen_values_follow_the_threshold() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let r = vec![1.0, 1.0, 3.0, 3.0];
        let sample = Sample::new(x, r.clone()).unwrap();

        let h = tree(1).produce(&sample, &r);
        assert_eq!(h.predict(-100.0), 1.0);
        assert_eq!(h.predict(1.49), 1.0);
        assert_eq!(h.predict(1.5), 3.0);
        assert_eq!(h.predict(100.0), 3.0);
    }


    #[test]
    fn info_reports_the_depth() {
        let tree = tree(3);
        assert_eq!(tree.name(), "Regression Tree");
        let info = tree.info().unwrap();
        assert!(info.contains(&("Max depth", "3".to_string())));
    }


    #[test]
    fn tree_is_written_as_dot() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let r = vec![1.0, 1.0, 3.0, 3.0];
        let sample = Sample::new(x, r.clone()).unwrap();
        let h = tree(1).produce(&sample, &r);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.dot");
        h.to_dot_file(&path).unwrap();

        let dot = std::fs::read_to_string(&path).unwrap();
        assert!(dot.starts_with("graph RegressionTree {"));
        assert!(dot.contains("x < 1.50 ?"));
        assert!(dot.contains("node_0 -- node_1"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
