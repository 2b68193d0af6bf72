//! Integration tests for the font and background libraries
//!
//! Exercised against [`MemoryGateway`]:
//! - Font upload, validation and metadata cleanup on failure
//! - Owner-checked font delete
//! - Background upload, listing and delete

use studio_gateway::{
    AuthProvider, BackgroundLibrary, FontLibrary, FontMetadata, GatewayError, MemoryGateway,
    Operation, UploadFile, User, BACKGROUNDS_BUCKET, FONTS_BUCKET, MAX_FONT_BYTES,
};

// =============================================================================
// Font library
// =============================================================================

#[test]
fn test_upload_font_derives_format_and_family() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("my-brand.ttf", vec![7u8; 2048]);
    let font = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1_700_000_000_000)
        .unwrap();

    assert_eq!(font.format, "ttf");
    assert_eq!(font.font_family, "My Brand");
    assert_eq!(font.font_weight, "400");
    assert_eq!(font.font_style, "normal");
    assert_eq!(font.folder_id, "fonts");
    assert_eq!(font.file_size, 2048);
    assert_eq!(font.uploaded_at, 1_700_000_000_000);
    assert!(gw.contains_object(FONTS_BUCKET, "fonts/my-brand-1700000000000.ttf"));
    assert!(font.file_url.ends_with("/public/fonts/fonts/my-brand-1700000000000.ttf"));
}

#[test]
fn test_upload_font_with_user_prefix() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("Creative_Sans.woff2", vec![0u8; 16]);
    let font = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), Some("u-1"), 9)
        .unwrap();

    assert_eq!(font.uploaded_by.as_deref(), Some("u-1"));
    assert!(gw.contains_object(FONTS_BUCKET, "fonts/u-1/creative-sans-9.woff2"));
}

#[test]
fn test_validation_failure_never_reaches_storage() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    let file = UploadFile::described("big.otf", MAX_FONT_BYTES + 1);
    let err = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1)
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Font file too large. Maximum size is 10MB.");

    let file = UploadFile::new("readme.txt", vec![1]);
    let err = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1)
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(gw.object_count(), 0);
    assert_eq!(gw.font_count(), 0);
}

#[test]
fn test_storage_failure_reports_upload_failed() {
    let gw = MemoryGateway::new();
    gw.fail(Operation::Upload);
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("a.ttf", vec![1]);
    let err = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1)
        .unwrap_err();
    assert!(err.to_string().starts_with("Upload failed: "));
    assert_eq!(gw.font_count(), 0);
}

#[test]
fn test_insert_failure_removes_uploaded_object() {
    let gw = MemoryGateway::new();
    gw.fail(Operation::InsertFont);
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("a.ttf", vec![1]);
    let err = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1)
        .unwrap_err();
    assert!(err.to_string().starts_with("Database error: "));
    assert_eq!(gw.object_count(), 0);
}

#[test]
fn test_listing_and_search() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    for (i, name) in ["elegant-serif.ttf", "bold-display.otf", "creative-sans.woff"]
        .iter()
        .enumerate()
    {
        let file = UploadFile::new(*name, vec![0u8; 8]);
        library
            .upload_font(&file, FontMetadata::from_filename(name), None, i as u64 + 1)
            .unwrap();
    }

    let all = library.all_fonts().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].font_family, "Creative Sans");

    assert_eq!(library.fonts_in_folder("fonts").unwrap().len(), 3);
    assert!(library.fonts_in_folder("logos").unwrap().is_empty());

    let hits = library.search_fonts("SERIF").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].font_family, "Elegant Serif");
}

#[test]
fn test_delete_font_removes_record_and_object() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("a.ttf", vec![1]);
    let font = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), None, 1)
        .unwrap();

    library.delete_font(&font.id, None).unwrap();
    assert_eq!(gw.font_count(), 0);
    assert_eq!(gw.object_count(), 0);

    let err = library.delete_font(&font.id, None).unwrap_err();
    assert_eq!(err.to_string(), "Font not found");
}

#[test]
fn test_delete_font_checks_owner() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("a.ttf", vec![1]);
    let font = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), Some("owner"), 1)
        .unwrap();

    let stranger = User::new("stranger", "someone@example.com");
    let err = library.delete_font(&font.id, Some(&stranger)).unwrap_err();
    assert!(err.is_permission_denied());
    assert_eq!(
        err.to_string(),
        "Permission denied. You can only delete your own fonts."
    );
    assert_eq!(gw.font_count(), 1);

    let admin = User::new("boss", "boss@example.com").with_role("admin");
    library.delete_font(&font.id, Some(&admin)).unwrap();
    assert_eq!(gw.font_count(), 0);
}

#[test]
fn test_delete_font_ignores_storage_failure() {
    let gw = MemoryGateway::new();
    let library = FontLibrary::new(&gw);

    let file = UploadFile::new("a.ttf", vec![1]);
    let font = library
        .upload_font(&file, FontMetadata::from_filename(&file.name), Some("owner"), 1)
        .unwrap();

    gw.fail(Operation::Remove);
    let owner = User::new("owner", "owner@example.com");
    library.delete_font(&font.id, Some(&owner)).unwrap();
    assert_eq!(gw.font_count(), 0);
    assert_eq!(gw.object_count(), 1);
}

// =============================================================================
// Background library
// =============================================================================

#[test]
fn test_background_upload_list_delete() {
    let gw = MemoryGateway::new();
    let library = BackgroundLibrary::new(&gw);

    let file = UploadFile::new("sunset.JPG", vec![3u8; 64]);
    let image = library.upload(&file, None, 77).unwrap();
    assert_eq!(image.id, "backgrounds/background-77.jpg");
    assert_eq!(image.filename, "sunset.JPG");
    assert_eq!(image.created_at, 77);
    assert!(image.url.ends_with("/public/backgrounds/backgrounds/background-77.jpg"));

    let listed = library.list("backgrounds").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, image.id);
    assert_eq!(listed[0].url, image.url);

    library.delete(&image.id).unwrap();
    assert!(!gw.contains_object(BACKGROUNDS_BUCKET, &image.id));
}

#[test]
fn test_background_rejects_non_image() {
    let gw = MemoryGateway::new();
    let library = BackgroundLibrary::new(&gw);

    let err = library
        .upload(&UploadFile::new("clip.mov", vec![1]), Some("u"), 1)
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
    assert_eq!(gw.object_count(), 0);
}

#[test]
fn test_current_user_round_trip() {
    let gw = MemoryGateway::new();
    assert_eq!(gw.current_user().unwrap(), None);

    gw.set_user(Some(User::new("u", "admin@studio64.com")));
    let user = gw.current_user().unwrap().unwrap();
    assert_eq!(user.email.as_deref(), Some("admin@studio64.com"));
}
