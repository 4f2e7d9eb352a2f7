#[cfg(test)]
mod unit_tests {

    use crate::{Bytenorm, FoldDiacritics, LowerCase, PercentEncode, Trim};
    use std::borrow::Cow;

    #[test]
    fn single_transform_engine() {
        let engine = Bytenorm::builder().add_transform(LowerCase).build();
        let out = engine.run(b"HELLO WORLD".as_ref()).unwrap();
        assert_eq!(out.as_ref(), b"hello world");
    }

    #[test]
    fn zero_copy_when_nothing_applies() {
        let engine = Bytenorm::builder()
            .add_transform(Trim)
            .add_transform(LowerCase)
            .add_transform(FoldDiacritics)
            .build();
        let input: &[u8] = b"already clean";
        let out = engine.run(input).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn empty_input_stays_empty() {
        let engine = Bytenorm::builder()
            .add_transform(Trim)
            .add_transform(LowerCase)
            .add_transform(PercentEncode)
            .build();
        assert_eq!(engine.run(b"".as_ref()).unwrap().as_ref(), b"");
    }

    #[test]
    fn owned_input_is_accepted() {
        let engine = Bytenorm::builder().add_transform(Trim).build();
        let out = engine.run(b" owned ".to_vec()).unwrap();
        assert_eq!(out.as_ref(), b"owned");
    }
}
