//! Fingerprint engine tests
//!
//! Covers the hash contract, the MAC display form, signal joining, caching
//! idempotence and storage degradation.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::{Error, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixed_signals() -> SignalSet {
        SignalSet {
            user_agent: "fingermark/0.1.0 (linux; x86_64)".to_string(),
            language: "en_US.UTF-8".to_string(),
            screen: "1920x1080".to_string(),
            color_depth: Some(24),
            timezone_offset_minutes: -120,
            platform: "linux x86_64".to_string(),
            storage_enabled: true,
            hardware_concurrency: Some(8),
            device_memory_gb: Some(16),
            canvas_snapshot: "data:image/png;base64,aGVsbG8=".to_string(),
            webgl_vendor: "Google Inc. (NVIDIA)".to_string(),
            webgl_renderer: "ANGLE (NVIDIA GeForce RTX 3080 Direct3D11 vs_5_0 ps_5_0)".to_string(),
        }
    }

    /// Signal reader returning a fixed set and counting its reads
    struct CountingReader {
        signals: SignalSet,
        reads: AtomicUsize,
    }

    impl CountingReader {
        fn new(signals: SignalSet) -> Self {
            Self {
                signals,
                reads: AtomicUsize::new(0),
            }
        }

        fn read_count(&self) -> usize {
            self.reads.load(Ordering::Relaxed)
        }
    }

    impl SignalReader for CountingReader {
        fn read(&self) -> SignalSet {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.signals.clone()
        }
    }

    /// Store where every read and write fails, like a fully disabled storage context
    struct DenyStore;

    impl IdentityStore for DenyStore {
        fn load(&self) -> Result<Option<String>> {
            Err(Error::storage("storage disabled"))
        }

        fn save(&self, _id: &str) -> Result<()> {
            Err(Error::storage("storage disabled"))
        }
    }

    fn assert_valid_fingerprint(id: &str) {
        assert_eq!(id.len(), FINGERPRINT_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    // ============================================================================
    // Hash Tests
    // ============================================================================

    #[test]
    fn test_hash_deterministic() {
        let input = fixed_signals().join();

        let first = hash(&input);
        let second = hash(&input);
        let third = hash(&input);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_hash_fixed_length_across_input_sizes() {
        let len_31 = "x".repeat(31);
        let len_32 = "x".repeat(32);
        let len_1000 = "x".repeat(1000);

        for input in ["", "a", len_31.as_str(), len_32.as_str(), len_1000.as_str()] {
            let id = hash(input);
            assert_valid_fingerprint(&id);
        }
    }

    #[test]
    fn test_hash_empty_input_is_all_zero() {
        assert_eq!(hash(""), EMPTY_FINGERPRINT);
        assert_eq!(EMPTY_FINGERPRINT.len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_hash_near_duplicates_do_not_collide() {
        let base = fixed_signals();
        let mut variant = fixed_signals();
        variant.hardware_concurrency = Some(16);

        assert_ne!(hash(&base.join()), hash(&variant.join()));
        assert_ne!(hash("device one"), hash("device two"));
        assert_ne!(hash("abc"), hash("abd"));
    }

    #[test]
    fn test_hash_non_empty_input_differs_from_empty() {
        assert_ne!(hash("a"), EMPTY_FINGERPRINT);
    }

    // ============================================================================
    // Display Form Tests
    // ============================================================================

    #[test]
    fn test_format_as_mac_on_valid_id() {
        let id = "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6";
        assert_eq!(format_as_mac(id), "A1:B2:C3:D4:E5:F6");
    }

    #[test]
    fn test_format_as_mac_groups() {
        let mac = format_as_mac(&hash("some device"));

        let groups: Vec<&str> = mac.split(':').collect();
        assert_eq!(groups.len(), 6);
        for group in groups {
            assert_eq!(group.len(), 2);
            assert!(group.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_format_as_mac_fallback_on_short_input() {
        assert_eq!(format_as_mac(""), MAC_FALLBACK);
        assert_eq!(format_as_mac("abc"), MAC_FALLBACK);
        assert_eq!(format_as_mac("0123456789a"), MAC_FALLBACK);
    }

    #[test]
    fn test_format_as_mac_exactly_twelve_chars() {
        assert_eq!(format_as_mac("deadbeef0123"), "DE:AD:BE:EF:01:23");
    }

    // ============================================================================
    // Signal Set Tests
    // ============================================================================

    #[test]
    fn test_signal_join_is_deterministic() {
        assert_eq!(fixed_signals().join(), fixed_signals().join());
    }

    #[test]
    fn test_signal_join_order_and_separator() {
        let joined = fixed_signals().join();

        let parts: Vec<&str> = joined.split(SIGNAL_SEPARATOR).collect();
        assert_eq!(parts.len(), 12);
        assert_eq!(parts[0], "fingermark/0.1.0 (linux; x86_64)");
        assert_eq!(parts[2], "1920x1080");
        assert_eq!(parts[4], "-120");
        assert_eq!(parts[6], "true");
        assert_eq!(parts[11], "ANGLE (NVIDIA GeForce RTX 3080 Direct3D11 vs_5_0 ps_5_0)");
    }

    #[test]
    fn test_absent_signals_join_as_empty() {
        let mut signals = fixed_signals();
        signals.color_depth = None;
        signals.hardware_concurrency = None;
        signals.device_memory_gb = None;

        let joined = signals.join();
        let parts: Vec<&str> = joined.split(SIGNAL_SEPARATOR).collect();
        assert_eq!(parts[3], "");
        assert_eq!(parts[7], "");
        assert_eq!(parts[8], "");
    }

    #[test]
    fn test_sentinel_only_signals_still_hash() {
        let signals = SignalSet {
            user_agent: String::new(),
            language: String::new(),
            screen: SCREEN_SENTINEL.to_string(),
            color_depth: None,
            timezone_offset_minutes: 0,
            platform: String::new(),
            storage_enabled: false,
            hardware_concurrency: None,
            device_memory_gb: None,
            canvas_snapshot: CANVAS_SENTINEL.to_string(),
            webgl_vendor: WEBGL_SENTINEL.to_string(),
            webgl_renderer: WEBGL_SENTINEL.to_string(),
        };

        assert_valid_fingerprint(&hash(&signals.join()));
    }

    // ============================================================================
    // Engine Tests
    // ============================================================================

    #[test]
    fn test_generate_returns_valid_fingerprint() {
        let reader = Arc::new(CountingReader::new(fixed_signals()));
        let engine = FingerprintEngine::new(reader, Arc::new(MemoryStore::new()));

        assert_valid_fingerprint(&engine.generate());
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent_and_generates_once() {
        let reader = Arc::new(CountingReader::new(fixed_signals()));
        let engine = FingerprintEngine::new(reader.clone(), Arc::new(MemoryStore::new()));

        let first = engine.get_or_create().await;
        let second = engine.get_or_create().await;

        assert_eq!(first, second);
        assert_valid_fingerprint(&first);
        assert_eq!(reader.read_count(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_honors_persisted_record() {
        let reader = Arc::new(CountingReader::new(fixed_signals()));
        let store = Arc::new(MemoryStore::new());
        store.save("c0ffee00c0ffee00c0ffee00c0ffee00").unwrap();

        let engine = FingerprintEngine::new(reader.clone(), store);
        let id = engine.get_or_create().await;

        // the persisted record wins unchanged, no generation at all
        assert_eq!(id, "c0ffee00c0ffee00c0ffee00c0ffee00");
        assert_eq!(reader.read_count(), 0);
    }

    #[tokio::test]
    async fn test_get_or_create_survives_disabled_storage() {
        let reader = Arc::new(CountingReader::new(fixed_signals()));
        let engine = FingerprintEngine::new(reader.clone(), Arc::new(DenyStore));

        let first = engine.get_or_create().await;
        let second = engine.get_or_create().await;

        assert_valid_fingerprint(&first);
        // session-only: cached in process even though nothing was persisted
        assert_eq!(first, second);
        assert_eq!(reader.read_count(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_persists_to_store() {
        let reader = Arc::new(CountingReader::new(fixed_signals()));
        let store = Arc::new(MemoryStore::new());
        let engine = FingerprintEngine::new(reader, store.clone());

        let id = engine.get_or_create().await;

        assert_eq!(store.load().unwrap(), Some(id));
    }

    // ============================================================================
    // File Store Tests
    // ============================================================================

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("state.json"));

        assert_eq!(store.load().unwrap(), None);

        store.save("a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6").unwrap();
        assert_eq!(
            store.load().unwrap(),
            Some("a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6".to_string())
        );
    }

    #[test]
    fn test_file_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/state.json"));

        store.save("deadbeefdeadbeefdeadbeefdeadbeef").unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn test_file_store_rejects_malformed_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(path);
        assert!(store.load().is_err());
    }

    #[tokio::test]
    async fn test_engine_reuses_state_file_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let first_engine = FingerprintEngine::new(
            Arc::new(CountingReader::new(fixed_signals())),
            Arc::new(FileStore::new(path.clone())),
        );
        let first = first_engine.get_or_create().await;

        // a different signal set would hash differently, but the persisted
        // record must win on the next load
        let mut other = fixed_signals();
        other.user_agent = "something else entirely".to_string();

        let second_engine = FingerprintEngine::new(
            Arc::new(CountingReader::new(other)),
            Arc::new(FileStore::new(path)),
        );
        let second = second_engine.get_or_create().await;

        assert_eq!(first, second);
    }
}
