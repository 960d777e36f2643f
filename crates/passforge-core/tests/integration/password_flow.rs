//! Password generation driven by stored settings.

use passforge_core::{
    classify_password_strength, generate_password, GenerationError, Settings, SettingsError,
    StrengthRating,
};

#[test]
fn default_settings_generate_a_rated_password() {
    let settings = Settings::default();
    settings.validate_password().unwrap();

    let pw = generate_password(settings.password_length, &settings.categories()).unwrap();
    assert_eq!(pw.len(), 16);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));

    // 16 chars scores 3 for length; any mix of 2+ categories reaches very strong,
    // a single-category draw reaches strong.
    let rating = classify_password_strength(&pw);
    assert!(
        matches!(rating, StrengthRating::Strong | StrengthRating::VeryStrong),
        "unexpected rating {rating:?} for 16-char password"
    );
}

#[test]
fn restored_settings_drive_generation() {
    let stored = r#"{
        "password_length": "40",
        "use_uppercase": false,
        "use_lowercase": false,
        "use_digits": "True",
        "use_symbols": false,
        "num_passphrase_words": "4"
    }"#;
    let settings: Settings = serde_json::from_str(stored).unwrap();
    settings.validate_password().unwrap();

    let pw = generate_password(settings.password_length, &settings.categories()).unwrap();
    assert_eq!(pw.len(), 40);
    assert!(pw.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(classify_password_strength(&pw), StrengthRating::Strong);
}

#[test]
fn validation_catches_what_the_engine_would_reject() {
    let mut settings = Settings::default();
    settings.use_uppercase = false;
    settings.use_lowercase = false;
    settings.use_digits = false;
    settings.use_symbols = false;

    assert_eq!(
        settings.validate_password(),
        Err(SettingsError::NoCharacterTypes)
    );
    assert_eq!(
        generate_password(settings.password_length, &settings.categories()),
        Err(GenerationError::NoCategoriesSelected)
    );
}

#[test]
fn engine_accepts_lengths_validation_rejects() {
    let settings = Settings {
        password_length: 200,
        ..Settings::default()
    };
    assert!(settings.validate_password().is_err());
    let pw = generate_password(settings.password_length, &settings.categories()).unwrap();
    assert_eq!(pw.len(), 200);
}
