//! Player address construction and the local-ROM registry.

use std::path::Path;

use romdeck::player::{catalog_url, encode_query_value, local_url, LocalRom, RomStore};

mod address_tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_query_value("sonic2"), "sonic2");
        assert_eq!(encode_query_value("road_rash2"), "road_rash2");
        assert_eq!(encode_query_value("a-b.c_d~e"), "a-b.c_d~e");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        assert_eq!(encode_query_value("a b"), "a%20b");
        assert_eq!(encode_query_value("a/b"), "a%2Fb");
        assert_eq!(
            encode_query_value("blob:romdeck/abc"),
            "blob%3Aromdeck%2Fabc"
        );
    }

    #[test]
    fn multibyte_input_encodes_every_byte() {
        // "б" is 0xD0 0xB1 in UTF-8
        assert_eq!(encode_query_value("б"), "%D0%B1");
    }

    #[test]
    fn catalog_url_carries_the_game_parameter() {
        assert_eq!(
            catalog_url("player.html", "comix_zone"),
            "player.html?game=comix_zone"
        );
    }

    #[test]
    fn local_url_carries_the_encoded_handle() {
        let mut store = RomStore::new();
        let handle = store.create(LocalRom {
            name: "demo.md".into(),
            bytes: vec![1, 2, 3],
        });
        let url = local_url("player.html", &handle);
        assert!(url.starts_with("player.html?url=blob%3Aromdeck%2F"));
        assert!(!url.contains("game="));
    }
}

mod romstore_tests {
    use super::*;

    fn rom(bytes: &[u8]) -> LocalRom {
        LocalRom {
            name: "x.gen".into(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn create_then_resolve_round_trips() {
        let mut store = RomStore::new();
        let handle = store.create(rom(&[0xAA, 0xBB]));
        assert_eq!(store.resolve(handle.as_str()), Some(&[0xAA, 0xBB][..]));
    }

    #[test]
    fn revoke_releases_the_bytes() {
        let mut store = RomStore::new();
        let handle = store.create(rom(&[1]));

        assert!(store.revoke(&handle));
        assert!(store.resolve(handle.as_str()).is_none());
        assert!(store.is_empty());

        // Revoking again is harmless but reports nothing held.
        assert!(!store.revoke(&handle));
    }

    #[test]
    fn handles_are_distinct_across_creates() {
        let mut store = RomStore::new();
        let a = store.create(rom(&[1]));
        let b = store.create(rom(&[2]));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}

mod local_rom_tests {
    use super::*;

    #[test]
    fn empty_path_models_a_dismissed_picker() {
        let picked = LocalRom::from_path(Path::new("")).unwrap();
        assert!(picked.is_none());
    }

    #[test]
    fn reads_name_and_bytes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("homebrew.gen");
        std::fs::write(&path, [0x4E, 0x75]).unwrap();

        let picked = LocalRom::from_path(&path).unwrap().unwrap();
        assert_eq!(picked.name, "homebrew.gen");
        assert_eq!(picked.bytes, vec![0x4E, 0x75]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");
        assert!(LocalRom::from_path(&path).is_err());
    }
}
