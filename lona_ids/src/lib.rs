pub mod ids;

pub use ids::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_nil() {
        let nil = NodeID::nil();
        assert!(nil.is_nil());
        assert_eq!(nil.index(), 0);
        assert_eq!(nil.generation(), 0);
    }

    #[test]
    fn node_id_parts() {
        let id = NodeID::from_parts(5, 2);
        assert_eq!(id.index(), 5);
        assert_eq!(id.generation(), 2);
        assert!(!id.is_nil());
    }

    #[test]
    fn node_id_roundtrip_u64_various() {
        // Broad sanity coverage without assuming internal bit layout.
        let cases: &[(u32, u32)] = &[
            (0, 0),
            (1, 0),
            (0, 1),
            (1, 1),
            (5, 2),
            (12345, 77),
            (u32::MAX, 0),
            (0, u32::MAX),
            (u32::MAX, u32::MAX),
        ];

        for &(i, g) in cases {
            let id = NodeID::from_parts(i, g);
            let packed = id.as_u64();
            let unpacked = NodeID::from_u64(packed);
            assert_eq!(
                unpacked, id,
                "roundtrip failed for index={i} generation={g} packed={packed}"
            );
        }
    }

    #[test]
    fn default_is_nil() {
        assert!(AttachmentID::default().is_nil());
        assert!(TextureID::default().is_nil());
        assert!(FontID::default().is_nil());
    }

    #[test]
    fn attachment_id_generational() {
        let id = AttachmentID::from_parts(3, 1);
        assert_eq!(id.index(), 3);
        assert_eq!(id.generation(), 1);
        assert!(!id.is_nil());
    }

    #[test]
    fn display_shows_index_and_generation() {
        let id = NodeID::from_parts(7, 4);
        assert_eq!(id.to_string(), "7:4");
        assert_eq!(format!("{id:?}"), "NodeID(7:4)");
    }
}
