mod tests {
    use led_orchestrator::{OutputDriver, Rgb, RegistryFull, StripRegistry};

    #[derive(Default)]
    struct MockDriver {
        inits: u32,
        max_rate: u16,
    }

    impl MockDriver {
        fn with_max_rate(max_rate: u16) -> Self {
            Self { inits: 0, max_rate }
        }
    }

    impl OutputDriver for MockDriver {
        fn init(&mut self) {
            self.inits += 1;
        }

        fn flush(&mut self, _pixels: &[Rgb], _brightness: u8) {}

        fn flush_solid(&mut self, _color: Rgb, _brightness: u8) {}

        fn max_refresh_rate(&self) -> u16 {
            self.max_rate
        }
    }

    #[test]
    fn test_register_initializes_driver_once() {
        let mut driver = MockDriver::default();
        let mut pixels = [Rgb::default(); 8];
        {
            let mut registry = StripRegistry::<4>::new();
            let index = registry.register(&mut driver, &mut pixels).unwrap();
            assert_eq!(index, 0);
            assert_eq!(registry.len(), 1);
        }
        assert_eq!(driver.inits, 1);
    }

    #[test]
    fn test_registration_order_is_iteration_order() {
        let mut a = MockDriver::with_max_rate(60);
        let mut b = MockDriver::with_max_rate(100);
        let mut c = MockDriver::with_max_rate(30);
        let mut buf_a = [Rgb::default(); 4];
        let mut buf_b = [Rgb::default(); 8];
        let mut buf_c = [Rgb::default(); 16];

        let mut registry = StripRegistry::<4>::new();
        assert_eq!(registry.register(&mut a, &mut buf_a).unwrap(), 0);
        assert_eq!(registry.register(&mut b, &mut buf_b).unwrap(), 1);
        assert_eq!(registry.register(&mut c, &mut buf_c).unwrap(), 2);

        let lens: Vec<usize> = registry.iter().map(led_orchestrator::Strip::len).collect();
        assert_eq!(lens, [4, 8, 16]);

        let rates: Vec<u16> = registry
            .iter()
            .map(|strip| strip.driver().max_refresh_rate())
            .collect();
        assert_eq!(rates, [60, 100, 30]);
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_first() {
        let mut a = MockDriver::with_max_rate(60);
        let mut b = MockDriver::with_max_rate(100);
        let mut buf_a = [Rgb::default(); 4];
        let mut buf_b = [Rgb::default(); 8];

        let mut registry = StripRegistry::<4>::new();
        registry.register(&mut a, &mut buf_a).unwrap();
        registry.register(&mut b, &mut buf_b).unwrap();

        assert_eq!(registry.get(1).unwrap().len(), 8);

        // One past the end and negative both resolve to the first strip
        assert_eq!(registry.get(2).unwrap().len(), 4);
        assert_eq!(registry.get(-1).unwrap().len(), 4);
        assert_eq!(registry.get_mut(99).unwrap().len(), 4);
        assert_eq!(registry.get_mut(-1).unwrap().len(), 4);
    }

    #[test]
    fn test_empty_registry_has_no_fallback() {
        let registry = StripRegistry::<4>::new();
        assert!(registry.is_empty());
        assert!(registry.get(0).is_none());
        assert!(registry.get(-1).is_none());
    }

    #[test]
    fn test_full_registry_rejects_registration() {
        let mut a = MockDriver::default();
        let mut b = MockDriver::default();
        let mut buf_a = [Rgb::default(); 4];
        let mut buf_b = [Rgb::default(); 4];

        let mut registry = StripRegistry::<1>::new();
        assert!(registry.register(&mut a, &mut buf_a).is_ok());
        assert_eq!(registry.register(&mut b, &mut buf_b), Err(RegistryFull));
        assert_eq!(registry.len(), 1);
    }
}
