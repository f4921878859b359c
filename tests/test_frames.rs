#[cfg(test)]
mod frames {
    use std::thread;

    use crossbeam_channel::bounded;

    use sortviz::{
        run, shell_gaps, Algorithm, ChannelSink, Counters, Engine, Frame, Never, OwnedFrame, Recorder, Runner,
        Sequence, SortConfig, StopFlag,
    };

    fn record(algorithm: Algorithm, values: Vec<u32>) -> (Sequence, Recorder) {
        let runner = Runner::new(SortConfig::new(values.len(), algorithm)).unwrap();
        let mut seq = Sequence::new(values).unwrap();
        let mut recorder = Recorder::new();
        runner.run(&mut seq, &mut recorder, &Never).unwrap();
        (seq, recorder)
    }

    #[test]
    fn bubble_three_elements() {
        let (seq, recorder) = record(Algorithm::Bubble, vec![3, 1, 2]);
        assert_eq!(seq.values(), &[1, 2, 3]);
        assert_eq!(seq.counters().swaps, 2);
        // three comparison frames, then the final frame
        assert_eq!(recorder.accessed(), vec![vec![0, 1], vec![1, 2], vec![0, 1], vec![]]);
        assert_eq!(recorder.frames[0].values, vec![1, 3, 2]);
    }

    #[test]
    fn selection_reversed() {
        let (seq, recorder) = record(Algorithm::Selection, vec![5, 4, 3, 2, 1]);
        assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
        assert_eq!(seq.counters().swaps, 2);
        let swap_frames: Vec<&OwnedFrame> = recorder.frames.iter().filter(|f| f.counters.swaps > 0).collect();
        assert_eq!(swap_frames[0].accessed, vec![4, 0]);
    }

    #[test]
    fn introsort_depth_zero_two_elements() {
        let mut seq = Sequence::new(vec![2, 1]).unwrap();
        let mut recorder = Recorder::new();
        Engine::new(&mut seq, &mut recorder, &Never).introsort(0, 0, 1).unwrap();
        assert_eq!(seq.values(), &[1, 2]);
        // the partition's scan frame and closing frame only
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn gaps_for_ten() {
        assert_eq!(shell_gaps(10), vec![4, 1]);
    }

    #[test]
    fn mergesort_frames_show_buffer() {
        let (seq, recorder) = record(Algorithm::Mergesort, vec![2, 1, 4, 3]);
        assert_eq!(seq.values(), &[1, 2, 3, 4]);
        // first merge writes 1 into aux[0] while aux still holds the copy
        assert_eq!(recorder.frames[0].values, vec![1, 1, 4, 3]);
        assert_eq!(recorder.frames[0].accessed, vec![0, 1, 0]);
    }

    #[test]
    fn sorted_input_single_final_frame() {
        let (seq, recorder) = record(Algorithm::Insertion, vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.counters(), Counters::default());
        assert_eq!(recorder.frames.len(), 1);
        assert!(recorder.last().unwrap().accessed.is_empty());
    }

    #[test]
    fn stop_requested_mid_sort() {
        for algorithm in Algorithm::ALL {
            let flag = StopFlag::new();
            let trigger = flag.clone();
            let mut count = 0;
            let mut sink = |_: Frame<'_>| {
                count += 1;
                if count == 5 {
                    trigger.stop();
                }
            };
            let (_, outcome) = run(SortConfig::new(100, algorithm), &mut sink, &flag).unwrap();
            assert!(outcome.is_cancelled(), "{algorithm}");
            assert_eq!(outcome.report().frames, 5, "{algorithm}");
        }
    }

    #[test]
    fn frames_to_renderer_thread() {
        let (tx, rx) = bounded::<OwnedFrame>(0);
        let renderer = thread::spawn(move || rx.iter().collect::<Vec<_>>());

        let mut sink = ChannelSink::new(tx);
        let (seq, outcome) = run(SortConfig::new(20, Algorithm::Shellsort), &mut sink, &Never).unwrap();
        drop(sink);

        let frames = renderer.join().unwrap();
        assert_eq!(frames.len() as u64, outcome.report().frames);
        assert_eq!(frames.last().unwrap().values, seq.values());
    }
}
