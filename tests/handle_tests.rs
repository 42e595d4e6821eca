// tests/handle_tests.rs
use mcrypt_rs::{Algorithm, CipherError, Mode, Registry};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_open_and_introspect_block_cipher() {
    init_logging();
    let mc = Registry::new().open("rijndael-128", "cbc").unwrap();

    assert_eq!(mc.algorithm_name().unwrap(), "rijndael-128");
    assert_eq!(mc.mode_name().unwrap(), "cbc");
    assert_eq!(mc.block_size().unwrap(), 16);
    assert_eq!(mc.key_size().unwrap(), 32);
    assert_eq!(mc.supported_key_sizes().unwrap(), &[16, 24, 32]);
    assert_eq!(mc.iv_size().unwrap(), 16);
    assert!(mc.has_iv().unwrap());
    assert!(mc.is_block_algorithm().unwrap());
    assert!(mc.is_block_mode().unwrap());
    assert!(mc.is_block_algorithm_mode().unwrap());
}

#[test]
fn test_open_and_introspect_stream_cipher() {
    let mc = Registry::new().open("arcfour", "stream").unwrap();

    assert_eq!(mc.block_size().unwrap(), 1);
    assert_eq!(mc.iv_size().unwrap(), 0);
    assert!(!mc.has_iv().unwrap());
    assert!(!mc.is_block_algorithm().unwrap());
    assert!(!mc.is_block_mode().unwrap());
    assert!(!mc.is_block_algorithm_mode().unwrap());
}

#[test]
fn test_iv_less_block_mode_reports_zero_iv_size() {
    let mc = Registry::new().open("blowfish", "ecb").unwrap();
    assert_eq!(mc.iv_size().unwrap(), 0);
    assert!(!mc.has_iv().unwrap());
    assert!(mc.generate_iv().unwrap().is_empty());
}

#[test]
fn test_open_unknown_names_fails() {
    let registry = Registry::new();
    assert!(matches!(
        registry.open("nonexistent-algo", "cbc"),
        Err(CipherError::Open(_))
    ));
    assert!(matches!(
        registry.open("rijndael-128", "nonexistent-mode"),
        Err(CipherError::Open(_))
    ));
}

#[test]
fn test_open_incompatible_pairing_fails() {
    let registry = Registry::new();
    assert!(matches!(
        registry.open("rijndael-128", "stream"),
        Err(CipherError::Open(_))
    ));
    assert!(matches!(
        registry.open("arcfour", "cbc"),
        Err(CipherError::Open(_))
    ));
}

#[test]
fn test_open_default_uses_config_defaults() {
    let mc = Registry::new().open_default().unwrap();
    assert_eq!(mc.algorithm_name().unwrap(), "rijndael-128");
    assert_eq!(mc.mode_name().unwrap(), "cbc");
}

#[test]
fn test_registry_listings() {
    let registry = Registry::new();
    let algorithms = registry.algorithms();
    let modes = registry.modes();

    assert_eq!(
        algorithms,
        vec!["rijndael-128", "des", "tripledes", "blowfish", "arcfour"]
    );
    assert_eq!(
        modes,
        vec!["cbc", "cfb", "ctr", "ecb", "ncfb", "nofb", "stream"]
    );
}

#[test]
fn test_set_key_accepts_every_supported_size() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    for size in [16usize, 24, 32] {
        mc.set_key(&vec![0u8; size], Some(&[0u8; 16])).unwrap();
    }
}

#[test]
fn test_set_key_rejects_unsupported_size() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    let err = mc.set_key(&[0u8; 10], None).unwrap_err();
    match err {
        CipherError::InvalidKeySize { got, accepted } => {
            assert_eq!(got, 10);
            assert_eq!(accepted, vec![16, 24, 32]);
        }
        other => panic!("expected InvalidKeySize, got {other:?}"),
    }
}

#[test]
fn test_key_size_check_toggle_allows_out_of_range_keys() {
    let mut mc = Registry::new().open("blowfish", "ecb").unwrap();

    // nominal blowfish key size is 56, so 16 bytes fails by default
    assert!(matches!(
        mc.set_key(&[0u8; 16], None),
        Err(CipherError::InvalidKeySize { .. })
    ));

    mc.validate_key_size(false);
    mc.set_key(&[0u8; 16], None).unwrap();
    assert_eq!(mc.encrypt(b"8bytemsg").unwrap().len(), 8);
}

#[test]
fn test_key_rejected_by_backend_when_check_disabled() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    mc.validate_key_size(false);
    mc.set_key(&[0u8; 10], Some(&[0u8; 16])).unwrap();

    // the cipher itself has no 10-byte variant
    assert!(matches!(
        mc.encrypt(b"hello"),
        Err(CipherError::Operation(_))
    ));
}

#[test]
fn test_set_key_rejects_wrong_iv_size() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    let err = mc.set_key(&[0u8; 16], Some(&[0u8; 8])).unwrap_err();
    match err {
        CipherError::InvalidIvSize { got, expected } => {
            assert_eq!(got, 8);
            assert_eq!(expected, 16);
        }
        other => panic!("expected InvalidIvSize, got {other:?}"),
    }
}

#[test]
fn test_iv_size_check_toggle_stores_mismatched_iv() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    mc.validate_iv_size(false);
    mc.set_key(&[0u8; 16], Some(&[0u8; 8])).unwrap();

    // the stored 8-byte IV is still unusable by the cipher itself
    assert!(matches!(
        mc.encrypt(b"hello"),
        Err(CipherError::Operation(_))
    ));
}

#[test]
fn test_transform_without_key_fails_with_operation_error() {
    let mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    assert!(matches!(
        mc.encrypt(b"hello"),
        Err(CipherError::Operation(_))
    ));
}

#[test]
fn test_generate_iv_matches_iv_size() {
    let mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    let iv = mc.generate_iv().unwrap();
    assert_eq!(iv.len(), 16);

    let mc = Registry::new().open("des", "cbc").unwrap();
    assert_eq!(mc.generate_iv().unwrap().len(), 8);
}

#[test]
fn test_close_is_terminal() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    mc.set_key(&[0u8; 16], Some(&[0u8; 16])).unwrap();
    mc.close().unwrap();

    assert!(matches!(mc.block_size(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.key_size(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.supported_key_sizes(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.iv_size(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.has_iv(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.algorithm_name(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.mode_name(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.self_test(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.generate_iv(), Err(CipherError::NotOpen)));
    assert!(matches!(mc.encrypt(b"x"), Err(CipherError::NotOpen)));
    assert!(matches!(mc.decrypt(b"x"), Err(CipherError::NotOpen)));
    assert!(matches!(
        mc.set_key(&[0u8; 16], None),
        Err(CipherError::NotOpen)
    ));
}

#[test]
fn test_double_close_is_reported() {
    let mut mc = Registry::new().open("rijndael-128", "cbc").unwrap();
    mc.close().unwrap();
    assert!(matches!(mc.close(), Err(CipherError::DoubleClose)));
}

#[test]
fn test_self_test_passes_for_every_algorithm() {
    let registry = Registry::new();
    for (algorithm, mode) in [
        ("rijndael-128", "cbc"),
        ("des", "cbc"),
        ("tripledes", "cbc"),
        ("blowfish", "ecb"),
        ("arcfour", "stream"),
    ] {
        let mc = registry.open(algorithm, mode).unwrap();
        assert!(mc.self_test().unwrap(), "self test failed for {algorithm}");
    }
}

#[test]
fn test_enum_names_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
    }
    for mode in Mode::ALL {
        assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
    }
}

#[test]
fn test_enum_serde_uses_canonical_names() {
    assert_eq!(
        serde_json::to_string(&Algorithm::Rijndael128).unwrap(),
        "\"rijndael-128\""
    );
    assert_eq!(serde_json::to_string(&Mode::Ncfb).unwrap(), "\"ncfb\"");

    let algorithm: Algorithm = serde_json::from_str("\"tripledes\"").unwrap();
    assert_eq!(algorithm, Algorithm::Tripledes);
}
