#[cfg(test)]
mod tests {
    use crate::{keys::*, *};

    fn resolver() -> ConfigResolver {
        ConfigResolver::default()
    }

    #[test]
    fn color_absent_or_empty_gives_default() {
        let r = resolver();
        assert_eq!(r.color(BORDER_COLOR, None, Color::YELLOW).unwrap(), Color::YELLOW);
        assert_eq!(r.color(BORDER_COLOR, Some(""), Color::YELLOW).unwrap(), Color::YELLOW);
    }

    #[test]
    fn color_from_components_and_names() {
        let r = resolver();
        assert_eq!(r.color(BORDER_COLOR, Some("255,0,0"), Color::YELLOW).unwrap(), Color::RED);
        assert_eq!(r.color(BORDER_COLOR, Some("RED"), Color::YELLOW).unwrap(), Color::RED);
        assert_eq!(r.color(BORDER_COLOR, Some("blue"), Color::YELLOW).unwrap(), Color::BLUE);
    }

    #[test]
    fn color_components_rgb_and_alpha() {
        let r = resolver();
        let c = r.color_from_components(BORDER_COLOR, "255,123,5").unwrap();
        assert_eq!((c.red, c.green, c.blue, c.alpha), (255, 123, 5, 255));

        let c = r.color_from_components(BORDER_COLOR, "255,123,5,10").unwrap();
        assert_eq!((c.red, c.green, c.blue, c.alpha), (255, 123, 5, 10));

    }

    #[test]
    fn color_components_reject_whitespace() {
        let err = resolver()
            .color_from_components(BORDER_COLOR, "255, 0, 0")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '255, 0, 0' for config parameter 'kaptcha.border.color'."
        );
        assert!(matches!(err.cause(), Some(ConfigErrorCause::Number(_))));
    }

    #[test]
    fn color_channel_out_of_range_has_bare_message() {
        let err = resolver()
            .color_from_components(BORDER_COLOR, "255,123,280")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '255,123,280' for config parameter 'kaptcha.border.color'."
        );
        assert!(matches!(
            err.cause(),
            Some(ConfigErrorCause::ColorChannel { value: 280 })
        ));
    }

    #[test]
    fn color_wrong_component_count() {
        let r = resolver();
        let err = r
            .color_from_components(BORDER_COLOR, "255,123,20,10,222")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '255,123,20,10,222' for config parameter 'kaptcha.border.color'. Color can only have 3 (RGB) or 4 (RGB with Alpha) values."
        );

        // Too few components never reaches the count check.
        let err = r.color_from_components(BORDER_COLOR, "255,123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '255,123' for config parameter 'kaptcha.border.color'."
        );

        let err = r.color_from_components(BORDER_COLOR, "255,a,100").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '255,a,100' for config parameter 'kaptcha.border.color'."
        );
        assert!(matches!(err.cause(), Some(ConfigErrorCause::Number(_))));
    }

    #[test]
    fn color_count_is_checked_before_range() {
        let err = resolver()
            .color_from_components(BORDER_COLOR, "300,0,0,0,0")
            .unwrap_err();
        assert_eq!(
            err.clause(),
            Some("Color can only have 3 (RGB) or 4 (RGB with Alpha) values.")
        );
    }

    #[test]
    fn color_trailing_empty_components_are_ignored() {
        let r = resolver();
        assert_eq!(
            r.color_from_components(BORDER_COLOR, "1,2,3,").unwrap(),
            Color::rgb(1, 2, 3)
        );
        assert_eq!(
            r.color(BORDER_COLOR, Some("1,2,3,4,,"), Color::BLACK).unwrap(),
            Color::rgba(1, 2, 3, 4)
        );
    }

    #[test]
    fn color_unknown_name_carries_lookup_cause() {
        let err = resolver()
            .color_from_name(BORDER_COLOR, "Katie Lloyd")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'Katie Lloyd' for config parameter 'kaptcha.border.color'."
        );
        assert!(matches!(err.cause(), Some(ConfigErrorCause::ColorName(_))));
    }

    #[test]
    fn fonts_absent_or_empty_give_defaults() {
        let defaults = vec![
            FontDescriptor::bold("Arial", 11),
            FontDescriptor::bold("Courier", 11),
        ];
        let r = resolver();
        for raw in [None, Some("")] {
            let fonts = r
                .fonts(TEXTPRODUCER_FONT_NAMES, raw, 12, defaults.clone())
                .unwrap();
            assert_eq!(fonts, defaults);
        }
    }

    #[test]
    fn fonts_are_bold_at_requested_size() {
        let fonts = resolver()
            .fonts(TEXTPRODUCER_FONT_NAMES, Some("Verdana,Arial"), 12, vec![])
            .unwrap();
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0].family, "Verdana");
        assert_eq!(fonts[0].weight, FontWeight::Bold);
        assert_eq!(fonts[0].size, 12);
        assert_eq!(fonts[1].family, "Arial");
        assert_eq!(fonts[1].weight, FontWeight::Bold);
        assert_eq!(fonts[1].size, 12);
    }

    #[test]
    fn unknown_font_family_falls_back() {
        let fonts = resolver()
            .fonts(TEXTPRODUCER_FONT_NAMES, Some("Whitney Rome"), 12, vec![])
            .unwrap();
        assert_eq!(fonts, vec![FontDescriptor::bold(FALLBACK_FAMILY, 12)]);
    }

    #[test]
    fn positive_int_defaults_and_parses() {
        let r = resolver();
        assert_eq!(r.positive_int(TEXTPRODUCER_FONT_SIZE, None, 40).unwrap(), 40);
        assert_eq!(r.positive_int(TEXTPRODUCER_FONT_SIZE, Some(""), 40).unwrap(), 40);
        assert_eq!(r.positive_int(TEXTPRODUCER_FONT_SIZE, Some("50"), 40).unwrap(), 50);
    }

    #[test]
    fn positive_int_rejects_values_below_one() {
        let r = resolver();
        for raw in ["-1", "0"] {
            let err = r
                .positive_int(TEXTPRODUCER_FONT_SIZE, Some(raw), 40)
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "Invalid value '{raw}' for config parameter 'kaptcha.textproducer.font.size'. Value must be greater than or equals to 1."
                )
            );
        }
    }

    #[test]
    fn positive_int_non_numeric_carries_parse_cause() {
        let err = resolver()
            .positive_int(TEXTPRODUCER_FONT_SIZE, Some("Lorraine Weller"), 40)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'Lorraine Weller' for config parameter 'kaptcha.textproducer.font.size'."
        );
        assert!(matches!(err.cause(), Some(ConfigErrorCause::Number(_))));
    }

    #[test]
    fn positive_int_out_of_range_carries_parse_cause() {
        let r = resolver();
        for raw in ["3000000000", "99999999999", "99999999999999999999"] {
            let err = r.positive_int(IMAGE_WIDTH, Some(raw), 200).unwrap_err();
            assert!(matches!(err.cause(), Some(ConfigErrorCause::Number(_))));
            assert_eq!(err.clause(), None);
            assert_eq!(
                err.to_string(),
                format!("Invalid value '{raw}' for config parameter 'kaptcha.image.width'.")
            );
        }
        assert_eq!(
            r.positive_int(IMAGE_WIDTH, Some("2147483647"), 200).unwrap(),
            2_147_483_647
        );
    }

    #[test]
    fn positive_int_rejects_surrounding_whitespace() {
        let r = resolver();
        for raw in [" 50", "50 ", "\t50"] {
            let err = r.positive_int(IMAGE_WIDTH, Some(raw), 200).unwrap_err();
            assert!(matches!(err.cause(), Some(ConfigErrorCause::Number(_))));
        }
        assert_eq!(r.positive_int(IMAGE_WIDTH, Some("+50"), 200).unwrap(), 50);
    }

    #[test]
    fn chars_are_taken_verbatim() {
        let r = resolver();
        let default: Vec<char> = "abcde2345678gfynmnpwx".chars().collect();
        for raw in [None, Some("")] {
            let chars = r
                .chars(TEXTPRODUCER_CHAR_STRING, raw, default.clone())
                .unwrap();
            assert_eq!(chars, default);
        }
        let chars = r
            .chars(TEXTPRODUCER_CHAR_STRING, Some("abcdefghij"), default)
            .unwrap();
        assert_eq!(chars.into_iter().collect::<String>(), "abcdefghij");
    }

    #[test]
    fn boolean_literals() {
        let r = resolver();
        assert!(r.boolean(BORDER, Some("yes"), false).unwrap());
        assert!(!r.boolean(BORDER, Some("no"), true).unwrap());
        assert!(r.boolean(BORDER, Some("YES"), false).unwrap());
        assert!(!r.boolean(BORDER, Some("No"), true).unwrap());
        assert!(r.boolean(BORDER, None, true).unwrap());
        assert!(r.boolean(BORDER, Some(""), true).unwrap());
    }

    #[test]
    fn boolean_rejects_other_text() {
        let err = resolver()
            .boolean(BORDER, Some("Carl Sack"), true)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'Carl Sack' for config parameter 'kaptcha.border'. Value must be either yes or no."
        );
        assert_eq!(err.key(), BORDER);
        assert_eq!(err.value(), "Carl Sack");
    }

    #[test]
    fn string_defaults_when_unset() {
        let r = resolver();
        assert_eq!(r.string(SESSION_CONFIG_KEY, None, "K"), "K");
        assert_eq!(r.string(SESSION_CONFIG_KEY, Some(""), "K"), "K");
        assert_eq!(r.string(SESSION_CONFIG_KEY, Some("answer"), "K"), "answer");
    }
}
