use crate::MediaType;

impl MediaType {
    /// Builds the value `media_type!` expands to.
    ///
    /// The macro has already checked and lowercased every part, so this
    /// only stores the static strings. Call the macro instead; the
    /// signature follows whatever the macro crate emits.
    ///
    /// # Accepted literals
    ///
    /// Anything `MediaType::parse` accepts, wildcards included:
    ///
    /// ```
    /// use mime_accept::media_type;
    ///
    /// let json = media_type!("Application/JSON");
    /// assert_eq!(json, mime_accept::APPLICATION_JSON);
    ///
    /// let any_image = media_type!("image/*");
    /// assert!(any_image.is_wildcard());
    ///
    /// let csv = media_type!("text/csv; header=present; charset=\"UTF-8\"");
    /// assert_eq!(csv.param("charset"), Some("utf-8"));
    /// assert_eq!(csv.canonical(), "text/csv;charset=utf-8;header=present");
    /// ```
    ///
    /// # Rejected at compile time
    ///
    /// A wildcard type needs a wildcard subtype:
    ///
    /// ```compile_fail
    /// mime_accept::media_type!("*/json");
    /// ```
    ///
    /// Parameters need a value:
    ///
    /// ```compile_fail
    /// mime_accept::media_type!("text/csv; header");
    /// ```
    ///
    /// One media type per literal, not an `Accept` list:
    ///
    /// ```compile_fail
    /// mime_accept::media_type!("text/html, application/json");
    /// ```
    ///
    /// Only a single string literal is taken:
    ///
    /// ```compile_fail
    /// mime_accept::media_type!(application/json);
    /// ```
    ///
    /// ```compile_fail
    /// let sub = "json";
    /// mime_accept::media_type!("application/{}", sub);
    /// ```
    #[doc(hidden)]
    pub const fn private_from_proc_macro(
        type_: &'static str,
        subtype: &'static str,
        params: &'static [(&'static str, &'static str)],
    ) -> MediaType {
        MediaType::from_static(type_, subtype, params)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn media_type_constant() {
        let a = media_type!("text/plain");
        let b = media_type!("text/plain");

        assert_eq!(a, TEXT_PLAIN);
        assert_eq!(b, TEXT_PLAIN);
        assert_eq!(a, b);
    }

    #[test]
    fn media_type_custom() {
        let foo = media_type!("text/foo");
        assert_eq!(foo.type_(), TEXT);
        assert_eq!(foo.subtype(), "foo");
        assert_eq!(foo.suffix(), None);
        assert!(!foo.has_params());

        let parsed = MediaType::parse("text/foo").unwrap();
        assert_eq!(foo, parsed);

        let bar = media_type!("text/bar");
        assert_ne!(foo, bar);
    }

    #[test]
    fn media_type_suffix() {
        let svg = media_type!("image/svg+xml");
        assert_eq!(svg.type_(), "image");
        assert_eq!(svg.subtype(), "svg+xml");
        assert_eq!(svg.suffix(), Some(XML));
        assert_eq!(svg, IMAGE_SVG);
    }

    #[test]
    fn media_type_params() {
        let utf8 = media_type!("text/plain; charset=utf-8");
        assert_eq!(utf8.param(CHARSET), Some(UTF_8));
        assert_eq!(utf8, TEXT_PLAIN_UTF_8);

        let mt = media_type!("multipart/form-data; boundary=\"AbCd\"; two=2");
        assert_eq!(mt.type_(), MULTIPART);
        assert_eq!(mt.subtype(), FORM_DATA);
        assert_eq!(mt.param(BOUNDARY).unwrap(), "abcd");
        assert_eq!(mt.params().len(), 2);
    }

    #[test]
    fn media_type_lowercase() {
        let mt = media_type!("MULTIPART/FORM-DATA; BOUNDARY=AbCd");
        assert_eq!(mt.to_string(), "multipart/form-data;boundary=abcd");
    }

    #[test]
    fn media_type_wildcard() {
        let any_text = media_type!("text/*");
        assert_eq!(any_text, TEXT_STAR);
        assert!(any_text.is_wildcard());
    }

    #[test]
    fn media_type_matches_runtime_parse() {
        let cases = [
            (media_type!("Application/JSON"), "Application/JSON"),
            (media_type!("image/*"), "image/*"),
            (
                media_type!("text/csv; header=present; charset=\"UTF-8\""),
                "text/csv; header=present; charset=\"UTF-8\"",
            ),
        ];

        for (literal, source) in &cases {
            let parsed = MediaType::parse(source).unwrap();
            assert_eq!(literal, &parsed, "{}", source);
            assert_eq!(literal.to_string(), parsed.to_string());
        }

        assert_eq!(cases[2].0.canonical(), "text/csv;charset=utf-8;header=present");
    }
}
