macro_rules! names {
    ($($id:ident, $e:expr;)*) => (
        $(
        #[doc = $e]
        pub const $id: &str = $e;
        )*

        #[test]
        fn test_names_macro_consts() {
            $(
            assert_eq!($id.to_ascii_lowercase(), $id);
            )*
        }
    )
}

names! {
    STAR, "*";

    TEXT, "text";
    IMAGE, "image";
    AUDIO, "audio";
    VIDEO, "video";
    APPLICATION, "application";
    MULTIPART, "multipart";
    FONT, "font";

    // common text/*
    PLAIN, "plain";
    HTML, "html";
    XML, "xml";
    JAVASCRIPT, "javascript";
    CSS, "css";
    CSV, "csv";
    EVENT_STREAM, "event-stream";
    MARKDOWN, "markdown";

    // common application/*
    JSON, "json";
    GZIP, "gzip";
    WWW_FORM_URLENCODED, "x-www-form-urlencoded";
    OCTET_STREAM, "octet-stream";
    PDF, "pdf";
    ZIP, "zip";

    // multipart/*
    FORM_DATA, "form-data";

    // common image/*
    GIF, "gif";
    JPEG, "jpeg";
    PNG, "png";
    SVG, "svg";

    // parameters
    CHARSET, "charset";
    BOUNDARY, "boundary";
    UTF_8, "utf-8";
}

macro_rules! mimes {
    ($($id:ident, $type_:expr, $subtype:expr $(, $name:expr => $value:expr)*;)+) => (
        $(
            mime_constant! {
                @DOC concat!("`", $type_, "/", $subtype, $(";", $name, "=", $value,)* "`"),
                $id, $type_, $subtype, &[$(($name, $value)),*]
            }
        )+

        #[test]
        fn test_mimes_macro_consts() {
            $(
            mime_constant_test! {
                $id
            }
            )+
        }
    )
}

macro_rules! mime_constant {
    (@DOC $doc:expr, $id:ident, $type_:expr, $subtype:expr, $params:expr) => (
        #[doc = $doc]
        pub const $id: crate::MediaType = crate::MediaType::from_static($type_, $subtype, $params);
    )
}

#[cfg(test)]
macro_rules! mime_constant_test {
    ($id:ident) => ({
        let constant = $id;
        let reparsed = crate::MediaType::parse(&constant.to_string()).unwrap();
        assert_eq!(constant, reparsed, stringify!($id));
        assert_eq!(constant.type_().to_ascii_lowercase(), constant.type_());
        assert_eq!(constant.subtype().to_ascii_lowercase(), constant.subtype());
    })
}

mimes! {
    TEXT_PLAIN, "text", "plain";
    TEXT_PLAIN_UTF_8, "text", "plain", "charset" => "utf-8";
    TEXT_HTML, "text", "html";
    TEXT_HTML_UTF_8, "text", "html", "charset" => "utf-8";
    TEXT_MARKDOWN, "text", "markdown";
    TEXT_CSS, "text", "css";
    TEXT_JAVASCRIPT, "text", "javascript";
    TEXT_XML, "text", "xml";
    TEXT_EVENT_STREAM, "text", "event-stream";
    TEXT_CSV, "text", "csv";

    IMAGE_JPEG, "image", "jpeg";
    IMAGE_GIF, "image", "gif";
    IMAGE_PNG, "image", "png";
    IMAGE_SVG, "image", "svg+xml";

    APPLICATION_JSON, "application", "json";
    APPLICATION_XML, "application", "xml";
    APPLICATION_GZIP, "application", "gzip";
    APPLICATION_ZIP, "application", "zip";
    APPLICATION_PDF, "application", "pdf";
    APPLICATION_OCTET_STREAM, "application", "octet-stream";
    APPLICATION_WWW_FORM_URLENCODED, "application", "x-www-form-urlencoded";

    MULTIPART_FORM_DATA, "multipart", "form-data";

    // wildcards, for building Accept headers and matching
    STAR_STAR, "*", "*";
    TEXT_STAR, "text", "*";
    IMAGE_STAR, "image", "*";
    APPLICATION_STAR, "application", "*";
}
