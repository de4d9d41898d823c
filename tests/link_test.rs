use sporlbrowse::spotify::{Link, LinkError, LinkKind};

#[test]
fn test_parse_plain_uris() {
    let link = Link::from_uri("spotify:album:6akEvsycLGftJxYudPjmqK").unwrap();
    assert_eq!(link.kind, LinkKind::Album);
    assert_eq!(link.id, "6akEvsycLGftJxYudPjmqK");
    assert_eq!(link.uri, "spotify:album:6akEvsycLGftJxYudPjmqK");
    assert_eq!(link.owner, None);

    let link = Link::from_uri("spotify:artist:0OdUWJ0sBjDrqHygGUXeCF").unwrap();
    assert_eq!(link.kind, LinkKind::Artist);

    let link = Link::from_uri("spotify:track:abc123").unwrap();
    assert_eq!(link.kind, LinkKind::Track);
}

#[test]
fn test_parse_user_playlist_uri() {
    let link = Link::from_uri("spotify:user:alice:playlist:37i9dQZF1DX").unwrap();

    assert_eq!(link.kind, LinkKind::Playlist);
    assert_eq!(link.id, "37i9dQZF1DX");
    assert_eq!(link.owner.as_deref(), Some("alice"));
    // Canonical form drops the owner
    assert_eq!(link.uri, "spotify:playlist:37i9dQZF1DX");
}

#[test]
fn test_parse_web_urls() {
    let link = Link::from_uri("https://open.spotify.com/album/6akEvsycLGftJxYudPjmqK?si=xyz").unwrap();
    assert_eq!(link.uri, "spotify:album:6akEvsycLGftJxYudPjmqK");

    let link = Link::from_uri("https://open.spotify.com/user/bob/playlist/abc").unwrap();
    assert_eq!(link.kind, LinkKind::Playlist);
    assert_eq!(link.owner.as_deref(), Some("bob"));

    assert!(matches!(
        Link::from_uri("https://example.com/album/abc"),
        Err(LinkError::Unrecognized(_))
    ));
}

#[test]
fn test_parse_failures() {
    assert_eq!(
        Link::from_uri("spotify:album:bad-id"),
        Err(LinkError::InvalidId("bad-id".to_string()))
    );
    assert_eq!(
        Link::from_uri("spotify:album:"),
        Err(LinkError::InvalidId(String::new()))
    );
    assert_eq!(
        Link::from_uri("spotify:show:abc"),
        Err(LinkError::UnsupportedType("show".to_string()))
    );
    assert!(matches!(
        Link::from_uri("spotify:album:abc:extra"),
        Err(LinkError::Unrecognized(_))
    ));
    assert!(matches!(
        Link::from_uri("album:abc"),
        Err(LinkError::Unrecognized(_))
    ));
    assert!(matches!(Link::from_uri(""), Err(LinkError::Unrecognized(_))));
}

#[test]
fn test_error_messages_name_the_input() {
    let err = Link::from_uri("spotify:album:bad-id").unwrap_err();
    assert!(err.to_string().contains("bad-id"));
}
