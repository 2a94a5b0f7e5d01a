#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use image::RgbaImage;

    use crate::{keys::*, *};

    const CUSTOM_NOISE: &str = "tests::CustomNoiseProducer";
    const PLAIN_NOISE: &str = "tests::PlainNoiseProducer";

    /// Noise producer that records how often it was configured.
    struct CustomNoiseProducer {
        /// Shared call counter.
        calls: Arc<AtomicUsize>,
    }

    impl Component for CustomNoiseProducer {
        fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
            Some(self)
        }
    }

    impl Configurable for CustomNoiseProducer {
        fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            config.noise_color()?;
            Ok(())
        }
    }

    impl NoiseProducer for CustomNoiseProducer {
        fn make_noise(&self, _: &mut RgbaImage, _: f32, _: f32, _: f32, _: f32) {}
    }

    /// Noise producer without a configuration hook.
    struct PlainNoiseProducer;

    impl Component for PlainNoiseProducer {}

    impl NoiseProducer for PlainNoiseProducer {
        fn make_noise(&self, _: &mut RgbaImage, _: f32, _: f32, _: f32, _: f32) {}
    }

    fn plain_noise() -> Box<dyn NoiseProducer> {
        Box::new(PlainNoiseProducer)
    }

    fn config_with(calls: &Arc<AtomicUsize>, store: ConfigStore) -> Config {
        let mut registry = ComponentRegistry::builtin();
        let counter = Arc::clone(calls);
        registry
            .register(CUSTOM_NOISE, move || -> Box<dyn NoiseProducer> {
                Box::new(CustomNoiseProducer {
                    calls: Arc::clone(&counter),
                })
            })
            .register(PLAIN_NOISE, plain_noise);
        Config::with_resolver(store, ConfigResolver::new(registry, FontCatalog::builtin()))
    }

    fn data_ptr<T: ?Sized>(b: &T) -> *const () {
        (b as *const T).cast()
    }

    #[test]
    fn custom_component_is_configured_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = config_with(&calls, ConfigStore::new());
        let noise = config
            .resolver()
            .instance::<dyn NoiseProducer>(NOISE_IMPL, Some(CUSTOM_NOISE), plain_noise(), &config)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        drop(noise);
    }

    #[test]
    fn configured_component_sees_store_values() {
        let calls = Arc::new(AtomicUsize::new(0));
        let store: ConfigStore = [(NOISE_IMPL, CUSTOM_NOISE), (NOISE_COLOR, "red")]
            .into_iter()
            .collect();
        let config = config_with(&calls, store);
        let _noise = config.noise_impl().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn configure_failure_surfaces_as_config_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let store: ConfigStore = [(NOISE_IMPL, CUSTOM_NOISE), (NOISE_COLOR, "not a color")]
            .into_iter()
            .collect();
        let config = config_with(&calls, store);
        let err = config.noise_impl().err().unwrap();
        assert_eq!(err.key(), NOISE_COLOR);
    }

    #[test]
    fn component_without_hook_is_returned_as_is() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = config_with(&calls, ConfigStore::new());
        let noise = config
            .resolver()
            .instance::<dyn NoiseProducer>(NOISE_IMPL, Some(PLAIN_NOISE), plain_noise(), &config);
        assert!(noise.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn absent_or_empty_name_returns_the_same_default() {
        let config = Config::new(ConfigStore::new());
        for raw in [None, Some("")] {
            let default = plain_noise();
            let before = data_ptr(&*default);
            let got = config
                .resolver()
                .instance::<dyn NoiseProducer>(BACKGROUND_IMPL, raw, default, &config)
                .unwrap();
            assert_eq!(data_ptr(&*got), before);
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        let config = Config::new(ConfigStore::new());
        let err = config
            .resolver()
            .instance::<dyn NoiseProducer>(
                BACKGROUND_IMPL,
                Some("kaptcha::BostonLegal"),
                plain_noise(),
                &config,
            )
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid value 'kaptcha::BostonLegal' for config parameter 'kaptcha.background.impl'."
        );
        assert!(matches!(
            err.cause(),
            Some(ConfigErrorCause::Instance(InstanceError::NotFound { .. }))
        ));
    }

    #[test]
    fn capability_mismatch_is_a_construction_failure() {
        let config = Config::new(ConfigStore::new());
        let err = config
            .resolver()
            .instance::<dyn NoiseProducer>(
                NOISE_IMPL,
                Some(builtin::GRADIENT_BACKGROUND),
                plain_noise(),
                &config,
            )
            .err()
            .unwrap();
        assert!(matches!(
            err.cause(),
            Some(ConfigErrorCause::Instance(InstanceError::Incompatible { .. }))
        ));
    }

    #[test]
    fn builtin_names_are_registered() {
        let registry = ComponentRegistry::builtin();
        for name in [
            builtin::DEFAULT_KAPTCHA,
            builtin::DEFAULT_TEXT_CREATOR,
            builtin::PLAIN_WORD_RENDERER,
            builtin::PLAIN_GIMPY,
            builtin::NO_NOISE,
            builtin::GRADIENT_BACKGROUND,
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert_eq!(registry.names().len(), 6);
    }

    #[test]
    fn resolver_exposes_its_tables() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = config_with(&calls, ConfigStore::new());
        let resolver = config.resolver();
        assert!(resolver.components().contains(CUSTOM_NOISE));
        assert!(resolver.components().contains(builtin::NO_NOISE));
        assert!(!resolver.components().contains("tests::Missing"));
        assert_eq!(resolver.font_catalog().lookup("courier new"), Some("Courier New"));

        let bare = ConfigResolver::new(ComponentRegistry::new(), FontCatalog::empty());
        assert!(bare.components().names().is_empty());
        assert_eq!(bare.font_catalog().lookup("Arial"), None);
    }

    #[test]
    fn builtin_selected_by_name_is_configured() {
        let store: ConfigStore = [
            (PRODUCER_IMPL, builtin::DEFAULT_KAPTCHA),
            (TEXTPRODUCER_IMPL, builtin::DEFAULT_TEXT_CREATOR),
            (TEXTPRODUCER_CHAR_STRING, "z"),
            (TEXTPRODUCER_CHAR_LENGTH, "3"),
        ]
        .into_iter()
        .collect();
        let producer = Config::new(store).producer_impl().unwrap();
        assert_eq!(producer.create_text(), "zzz");
    }
}
