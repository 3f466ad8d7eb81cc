mod tests {
    use std::convert::Infallible;
    use std::fmt::Debug;
    use std::panic::{self, AssertUnwindSafe};

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use smart_leds::SmartLedsWrite;
    use strip_effects::color::{BLACK, Rgb};
    use strip_effects::effect::EffectSlot;
    use strip_effects::{
        BufferedStrip, DemoConfig, Duration, EffectId, FrameError, FrameScheduler,
        LedKind, LedOutput, LedStrip, NoPin, NoStrip, StripError,
    };

    const N: usize = 25;

    /// Keeps every frame it is asked to send
    #[derive(Default)]
    struct RecordingWriter {
        frames: Vec<Vec<Rgb>>,
    }

    impl SmartLedsWrite for RecordingWriter {
        type Error = Infallible;
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Disconnected;

    /// Writer whose transmission always fails
    struct FailingWriter;

    impl SmartLedsWrite for FailingWriter {
        type Error = Disconnected;
        type Color = Rgb;

        fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            Err(Disconnected)
        }
    }

    /// Pin that remembers every level it was driven to
    #[derive(Default)]
    struct RecordingPin {
        levels: Vec<bool>,
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.levels.push(true);
            Ok(())
        }
    }

    /// Delay that records every wait and stops the frame loop after `limit` waits
    struct RecordingDelay {
        delays: Vec<Duration>,
        limit: usize,
    }

    impl RecordingDelay {
        fn new(limit: usize) -> Self {
            Self {
                delays: Vec::new(),
                limit,
            }
        }

        fn record(&mut self, delay: Duration) {
            self.delays.push(delay);
            if self.delays.len() >= self.limit {
                panic!("frame limit reached");
            }
        }
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.record(Duration::from_nanos(u64::from(ns)));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.record(Duration::from_millis(u64::from(ms)));
        }
    }

    /// Run the endless frame loop until `frames` delays were requested
    fn run_frames<S, P>(scheduler: FrameScheduler<S, P>, frames: usize) -> Vec<Duration>
    where
        S: LedStrip,
        S::Error: Debug,
        P: OutputPin,
    {
        let mut delay = RecordingDelay::new(frames);
        let stopped = panic::catch_unwind(AssertUnwindSafe(|| {
            scheduler.run(&mut delay);
        }));
        assert!(stopped.is_err());
        delay.delays
    }

    type RecordingStrip = BufferedStrip<RecordingWriter, N>;

    fn strip_scheduler(effect: EffectId) -> FrameScheduler<RecordingStrip, NoPin> {
        let config = DemoConfig::DEFAULT.with_effect(effect);
        let output = LedOutput::Strip(BufferedStrip::new(RecordingWriter::default()));
        assert_eq!(output.kind(), LedKind::Strip);
        FrameScheduler::new(&config, output)
    }

    fn frames(scheduler: &FrameScheduler<RecordingStrip, NoPin>) -> &[Vec<Rgb>] {
        &scheduler.strip().unwrap().writer().frames
    }

    #[test]
    fn test_configure_turns_strip_off() {
        let mut scheduler = strip_scheduler(EffectId::Rainbow);
        scheduler.configure().unwrap();

        assert_eq!(scheduler.kind(), LedKind::Strip);
        assert_eq!(frames(&scheduler), &[vec![BLACK; N]]);
    }

    #[test]
    fn test_tick_pushes_one_frame() {
        let mut scheduler = strip_scheduler(EffectId::KnightRider);
        let period = scheduler.tick().unwrap();

        assert_eq!(period, Duration::from_millis(250));
        let frames = frames(&scheduler);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0][0], Rgb { r: 50, g: 0, b: 0 });
        assert_eq!(frames[0][1], Rgb { r: 20, g: 0, b: 0 });
        assert_eq!(frames[0][2], Rgb { r: 5, g: 0, b: 0 });
        assert!(frames[0][3..].iter().all(|pixel| *pixel == BLACK));
    }

    #[test]
    fn test_ticks_animate_the_effect() {
        let mut scheduler = strip_scheduler(EffectId::LoopChase);
        for _ in 0..3 {
            assert_eq!(scheduler.tick().unwrap(), Duration::from_millis(500));
        }

        let heads: Vec<usize> = frames(&scheduler)
            .iter()
            .map(|frame| frame.iter().position(|p| p.b == 50).unwrap())
            .collect();
        assert_eq!(heads, vec![0, 1, 2]);

        let Some(EffectSlot::LoopChase(effect)) = scheduler.effect() else {
            panic!("expected loop chase");
        };
        assert_eq!(effect.index(), 3);
    }

    #[test]
    fn test_base_period_scales_frame_delay() {
        let config = DemoConfig::DEFAULT
            .with_effect(EffectId::KnightRider)
            .with_base_period(Duration::from_millis(200));
        let mut scheduler: FrameScheduler<_, NoPin> = FrameScheduler::new(
            &config,
            LedOutput::Strip(RecordingStrip::new(RecordingWriter::default())),
        );
        assert_eq!(scheduler.tick().unwrap(), Duration::from_millis(50));
    }

    #[test]
    fn test_failed_refresh_does_not_advance() {
        let config = DemoConfig::DEFAULT.with_effect(EffectId::KnightRider);
        let strip: BufferedStrip<FailingWriter, N> = BufferedStrip::new(FailingWriter);
        let mut scheduler: FrameScheduler<_, NoPin> =
            FrameScheduler::new(&config, LedOutput::Strip(strip));

        assert_eq!(
            scheduler.tick(),
            Err(FrameError::Strip(StripError::Write(Disconnected)))
        );
        let Some(EffectSlot::KnightRider(effect)) = scheduler.effect() else {
            panic!("expected knight rider");
        };
        assert_eq!(effect.index(), 0);
    }

    #[test]
    fn test_gpio_blinks() {
        let config = DemoConfig::DEFAULT;
        let mut scheduler: FrameScheduler<NoStrip, RecordingPin> =
            FrameScheduler::new(&config, LedOutput::Gpio(RecordingPin::default()));

        assert_eq!(scheduler.kind(), LedKind::Gpio);
        assert!(scheduler.effect().is_none());

        scheduler.configure().unwrap();
        for _ in 0..4 {
            assert_eq!(scheduler.tick().unwrap(), Duration::from_millis(1000));
        }

        assert_eq!(
            scheduler.pin().unwrap().levels,
            vec![false, false, true, false, true]
        );
        assert_eq!(scheduler.blink().map(|blink| blink.is_on()), Some(false));
    }

    #[test]
    fn test_run_waits_frame_period_after_each_frame() {
        let scheduler = strip_scheduler(EffectId::KnightRider);
        assert_eq!(
            run_frames(scheduler, 3),
            vec![Duration::from_millis(250); 3]
        );

        let scheduler = strip_scheduler(EffectId::Rainbow);
        assert_eq!(
            run_frames(scheduler, 2),
            vec![Duration::from_millis(500); 2]
        );
    }

    #[test]
    fn test_run_blink_waits_base_period() {
        let config = DemoConfig::DEFAULT.with_base_period(Duration::from_millis(300));
        let scheduler: FrameScheduler<NoStrip, RecordingPin> =
            FrameScheduler::new(&config, LedOutput::Gpio(RecordingPin::default()));
        assert_eq!(
            run_frames(scheduler, 3),
            vec![Duration::from_millis(300); 3]
        );
    }

    #[test]
    fn test_run_keeps_pacing_after_failed_frames() {
        let config = DemoConfig::DEFAULT.with_effect(EffectId::KnightRider);
        let strip: BufferedStrip<FailingWriter, N> = BufferedStrip::new(FailingWriter);
        let scheduler: FrameScheduler<_, NoPin> =
            FrameScheduler::new(&config, LedOutput::Strip(strip));
        let period = scheduler.frame_period();
        assert_eq!(period, Duration::from_millis(250));

        assert_eq!(run_frames(scheduler, 4), vec![period; 4]);
    }

    #[test]
    fn test_run_rounds_delay_down_to_milliseconds() {
        let config = DemoConfig::DEFAULT
            .with_effect(EffectId::KnightRider)
            .with_base_period(Duration::from_millis(1002));
        let scheduler: FrameScheduler<_, NoPin> = FrameScheduler::new(
            &config,
            LedOutput::Strip(RecordingStrip::new(RecordingWriter::default())),
        );
        assert_eq!(scheduler.frame_period(), Duration::from_micros(250_500));
        assert_eq!(run_frames(scheduler, 1), vec![Duration::from_millis(250)]);
    }
}
