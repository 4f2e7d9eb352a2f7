#[cfg(test)]
mod integration_tests {

    use crate::{
        Bytenorm, FoldDiacritics, HexPolicy, LowerCase, PercentDecode, PercentEncode, SimplifyHan,
        Trim, case, diacritic, percent, utf8,
    };

    #[test]
    fn title_lookup_pipeline() {
        let engine = Bytenorm::builder()
            .add_transform(Trim)
            .add_transform(LowerCase)
            .add_transform(FoldDiacritics)
            .build();

        let out = engine.run("  Forêt-Noire ".as_bytes()).unwrap();
        assert_eq!(out.as_ref(), b"foret-noire");
    }

    #[test]
    fn link_decode_pipeline() {
        let engine = Bytenorm::builder()
            .add_transform(PercentDecode)
            .add_transform(Trim)
            .build();

        let out = engine.run(b"%20Caf%C3%A9%20".as_ref()).unwrap();
        assert_eq!(out.as_ref(), "Café".as_bytes());
    }

    #[test]
    fn strict_decode_pipeline_rejects_garbage() {
        let engine = Bytenorm::builder()
            .hex_policy(HexPolicy::Strict)
            .add_transform(PercentDecode)
            .build();

        assert!(engine.run(b"%G0".as_ref()).is_err());
        assert_eq!(engine.run(b"%41".as_ref()).unwrap().as_ref(), b"A");
    }

    #[test]
    fn simplified_pack_pipeline() {
        let engine = Bytenorm::builder()
            .add_transform(Trim)
            .add_transform(SimplifyHan)
            .build();

        let out = engine.run(" 臺灣鐵路 ".as_bytes()).unwrap();
        // 臺 has no entry in the pair table; the others do.
        assert_eq!(out.as_ref(), "臺湾铁路".as_bytes());
    }

    #[test]
    fn encode_after_fold_round_trip() {
        // The way the server builds a redirect: normalize the title, then
        // escape it for the Location header.
        let engine = Bytenorm::builder()
            .add_transform(Trim)
            .add_transform(FoldDiacritics)
            .add_transform(PercentEncode)
            .build();

        let out = engine.run(" São Paulo ".as_bytes()).unwrap();
        assert_eq!(out.as_ref(), b"Sao%20Paulo");
    }

    #[test]
    fn narrow_decode_chain_for_legacy_callers() {
        // Legacy path: UTF-8 in, Latin-1-ish bytes out, then fold per byte.
        let narrowed = utf8::decode_to_bytes("Ängström".as_bytes());
        let lowered = case::lower(&narrowed);
        assert_eq!(lowered, b"\xE4ngstr\xF6m".to_vec());
    }

    #[test]
    fn fold_then_encode_matches_spec_scenarios() {
        assert_eq!(percent::encode(b" <hi>"), b"%20%3Chi%3E");
        assert_eq!(
            percent::decode(b"%41%42", crate::HexPolicy::Permissive).unwrap(),
            b"AB"
        );
        assert_eq!(utf8::encode(&[0x20AC]), vec![0xE2, 0x82, 0xAC]);
        assert_eq!(utf8::decode("café".as_bytes()), vec![0x63, 0x61, 0x66, 0xE9]);
        assert_eq!(diacritic::fold_utf8("café".as_bytes()), b"cafe");
    }
}
