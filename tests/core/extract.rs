//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use starimage::core::{extract_with, ExtractionResult};

    use crate::common::{sample_transport, FakeTransport, SAMPLE_HTML};

    #[test]
    fn largest_image_from_document() {
        let transport = sample_transport();

        let result = extract_with(&transport, Some(SAMPLE_HTML), None);

        assert_eq!(
            result,
            Some(ExtractionResult {
                url: "http://a.com/2.gif".to_string(),
                filename: "2.gif".to_string(),
                size: 500,
                width: Some(100),
                height: Some(300),
            })
        );
    }

    #[test]
    fn relative_images_without_base_are_never_probed() {
        let transport = sample_transport();

        extract_with(&transport, Some(SAMPLE_HTML), None);

        assert_eq!(
            transport.probed_urls(),
            vec![
                "http://a.com/1.gif",
                "http://a.com/2.gif",
                "http://a.com/3.gif",
                "http://a.com/4.gif",
            ]
        );
    }

    #[test]
    fn explicit_base_url_resolves_relative_images() {
        let transport = sample_transport().with_size("http://a.com/r2.gif", 900);

        let result = extract_with(&transport, Some(SAMPLE_HTML), Some("http://a.com")).unwrap();

        assert_eq!(result.url, "http://a.com/r2.gif");
        assert_eq!(result.filename, "r2.gif");
        assert_eq!(result.size, 900);
        assert_eq!(result.width, None);
        assert_eq!(result.height, None);
        assert_eq!(transport.probed_urls().len(), 7);
    }

    #[test]
    fn fragment_input() {
        let transport = FakeTransport::new()
            .with_size("http://a.com/img1.gif", 10)
            .with_size("http://a.com/img.jpg", 20);

        let result = extract_with(
            &transport,
            Some("<div><img src='http://a.com/img1.gif' />\n<img src='http://a.com/img.jpg' /></div>"),
            None,
        )
        .unwrap();

        assert_eq!(result.url, "http://a.com/img.jpg");
        assert_eq!(result.filename, "img.jpg");
    }

    #[test]
    fn plain_text_fragment_with_embedded_tag() {
        let transport = FakeTransport::new().with_size("http://a.com/only.png", 12);

        let result = extract_with(
            &transport,
            Some("look at this: <img src=\"http://a.com/only.png\" width=\"12.7\"> nice"),
            None,
        )
        .unwrap();

        assert_eq!(result.size, 12);
        assert_eq!(result.width, Some(12));
    }

    #[test]
    fn url_input_derives_base_from_host() {
        let transport = FakeTransport::new()
            .with_document(
                "http://example.com/page",
                "<html><body><img src=\"/img1.gif\"></body></html>",
            )
            .with_size("http://example.com/img1.gif", 2048);

        let result = extract_with(&transport, Some("http://example.com/page"), None).unwrap();

        assert_eq!(result.url, "http://example.com/img1.gif");
        assert_eq!(result.size, 2048);
        assert_eq!(transport.fetched_urls(), vec!["http://example.com/page"]);
    }

    #[test]
    fn url_input_drops_path_when_deriving_base() {
        let transport = FakeTransport::new()
            .with_document(
                "https://example.com/blog/post?id=1",
                "<html><body><img src=\"pic.png\"></body></html>",
            )
            .with_size("https://example.com/pic.png", 1);

        let result =
            extract_with(&transport, Some("https://example.com/blog/post?id=1"), None).unwrap();

        assert_eq!(result.url, "https://example.com/pic.png");
    }

    #[test]
    fn url_input_prefers_explicit_base() {
        let transport = FakeTransport::new()
            .with_document(
                "http://example.com/page",
                "<html><body><img src=\"/img1.gif\"></body></html>",
            )
            .with_size("http://cdn.example.net/img1.gif", 5);

        let result = extract_with(
            &transport,
            Some("http://example.com/page"),
            Some("http://cdn.example.net"),
        )
        .unwrap();

        assert_eq!(result.url, "http://cdn.example.net/img1.gif");
    }

    #[test]
    fn single_failing_probe_still_yields_result() {
        let transport = FakeTransport::new().with_failure("http://invalidurl.com/a.gif");

        let result = extract_with(
            &transport,
            Some("<html><body><img src='http://invalidurl.com/a.gif'></body></html>"),
            None,
        )
        .unwrap();

        assert_eq!(result.url, "http://invalidurl.com/a.gif");
        assert_eq!(result.size, 0);
    }

    #[test]
    fn image_inside_noscript_in_document() {
        let transport = FakeTransport::new().with_size("http://a.com/big.jpg", 10);

        let result = extract_with(
            &transport,
            Some("<html><body><noscript><img src='http://a.com/big.jpg'></noscript></body></html>"),
            None,
        )
        .unwrap();

        assert_eq!(result.url, "http://a.com/big.jpg");
        assert_eq!(result.size, 10);
    }

    #[test]
    fn image_inside_noscript_in_fragment() {
        let transport = FakeTransport::new().with_size("http://a.com/big.jpg", 10);

        let result = extract_with(
            &transport,
            Some("<div><img src='http://a.com/lazy.gif'><noscript><img src='http://a.com/big.jpg'></noscript></div>"),
            None,
        )
        .unwrap();

        assert_eq!(result.url, "http://a.com/big.jpg");
        assert_eq!(transport.probed_urls().len(), 2);
    }

    #[test]
    fn surrounding_whitespace_in_source_is_dropped() {
        let transport = FakeTransport::new().with_size("http://a.com/x.gif", 7);

        let result = extract_with(
            &transport,
            Some("<html><body><img src=' http://a.com/x.gif '><img src='http://a.com/x.gif'></body></html>"),
            None,
        )
        .unwrap();

        assert_eq!(result.url, "http://a.com/x.gif");
        assert_eq!(result.filename, "x.gif");
        assert_eq!(result.size, 7);
        assert_eq!(transport.probed_urls(), vec!["http://a.com/x.gif"]);
    }

    #[test]
    fn failing_probe_does_not_abort_selection() {
        let transport = sample_transport().with_failure("http://a.com/2.gif");

        let result = extract_with(&transport, Some(SAMPLE_HTML), None).unwrap();

        assert_eq!(result.url, "http://a.com/4.gif");
        assert_eq!(result.size, 450);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use starimage::core::extract_with;

    use crate::common::{FakeTransport, SAMPLE_HTML};

    #[test]
    fn no_input() {
        let transport = FakeTransport::new();

        assert_eq!(extract_with(&transport, None, None), None);
        assert!(transport.probed_urls().is_empty());
    }

    #[test]
    fn empty_string() {
        let transport = FakeTransport::new();

        assert_eq!(extract_with(&transport, Some(""), None), None);
    }

    #[test]
    fn document_without_images() {
        let transport = FakeTransport::new();

        assert_eq!(
            extract_with(&transport, Some("<html><head></head><body></body></html>"), None),
            None
        );
    }

    #[test]
    fn only_relative_images_without_base() {
        let transport = FakeTransport::new();

        assert_eq!(
            extract_with(
                &transport,
                Some("<html><body><img src='/a.gif'><img src='b.gif'></body></html>"),
                None
            ),
            None
        );
        assert!(transport.probed_urls().is_empty());
    }

    #[test]
    fn unreachable_document_url() {
        let transport = FakeTransport::new();

        assert_eq!(extract_with(&transport, Some("http://invalidurl.com"), None), None);
        assert_eq!(transport.fetched_urls(), vec!["http://invalidurl.com/"]);
        assert!(transport.probed_urls().is_empty());
    }

    #[test]
    fn unusable_explicit_base_leaves_relative_images() {
        let transport = FakeTransport::new();

        let result = extract_with(
            &transport,
            Some("<html><body><img src='/r1.gif'></body></html>"),
            Some("not a base url"),
        );

        assert_eq!(result, None);
    }

    #[test]
    fn non_http_image_sources() {
        let transport = FakeTransport::new();

        let result = extract_with(
            &transport,
            Some(SAMPLE_HTML.replace("http://", "ftp://").as_str()),
            None,
        );

        assert_eq!(result, None);
    }
}
