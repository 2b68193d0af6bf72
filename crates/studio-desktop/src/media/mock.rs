//! Built-in sample media shown until real content is uploaded

use super::types::{FontFile, ImageFile, VideoFile};

const VIDEO_BASE: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

// 2024-01-15 .. 2024-02-10, UTC midnight
const DATES: [u64; 6] = [
    1_705_276_800_000,
    1_705_708_800_000,
    1_706_140_800_000,
    1_706_745_600_000,
    1_707_091_200_000,
    1_707_523_200_000,
];

const THUMB_COLORS: [&str; 6] = ["4F46E5", "10B981", "F59E0B", "EF4444", "8B5CF6", "06B6D4"];

fn placeholder(size: &str, index: usize, text: &str) -> String {
    format!(
        "https://via.placeholder.com/{}/{}/FFFFFF?text={}",
        size,
        THUMB_COLORS[index % THUMB_COLORS.len()],
        text.replace(' ', "+")
    )
}

/// Sample videos for the portfolio's videos folder
pub fn mock_videos() -> Vec<VideoFile> {
    let rows: [(&str, &str, &str, u64, f64, &str, &str, (u32, u32)); 4] = [
        (
            "studio-intro.mp4",
            "Studio 64 Introduction",
            "Welcome video showcasing our creative studio",
            15_728_640,
            120.0,
            "BigBuckBunny.mp4",
            "Studio Intro",
            (1920, 1080),
        ),
        (
            "portfolio-showcase.mp4",
            "Portfolio Showcase",
            "Highlights of our best creative work",
            25_165_824,
            180.0,
            "ElephantsDream.mp4",
            "Portfolio",
            (1920, 1080),
        ),
        (
            "behind-scenes.mp4",
            "Behind the Scenes",
            "A look at our creative process",
            31_457_280,
            240.0,
            "ForBiggerBlazes.mp4",
            "Behind Scenes",
            (1280, 720),
        ),
        (
            "client-testimonial.mp4",
            "Client Testimonial",
            "What our clients say about working with us",
            20_971_520,
            90.0,
            "ForBiggerEscapes.mp4",
            "Testimonial",
            (1920, 1080),
        ),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(i, (filename, title, description, size, duration, source, thumb, (w, h)))| VideoFile {
                id: (i + 1).to_string(),
                filename: filename.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                file_size: *size,
                duration: *duration,
                thumbnail_url: placeholder("320x180", i, thumb),
                file_url: format!("{}/{}", VIDEO_BASE, source),
                folder_id: "videos".to_string(),
                format: "mp4".to_string(),
                width: *w,
                height: *h,
            },
        )
        .collect()
}

/// Sample photos for the gallery
pub fn mock_images() -> Vec<ImageFile> {
    let rows: [(&str, &str, &str, u64, &str); 6] = [
        (
            "studio-workspace.jpg",
            "Studio Workspace",
            "Our creative workspace where the magic happens",
            2_048_576,
            "jpg",
        ),
        ("team-photo.png", "Team Photo", "The amazing Studio 64 team", 3_145_728, "png"),
        (
            "project-showcase.jpg",
            "Project Showcase",
            "Highlights from our latest creative projects",
            1_572_864,
            "jpg",
        ),
        (
            "behind-scenes.gif",
            "Behind the Scenes",
            "A glimpse into our creative process",
            5_242_880,
            "gif",
        ),
        (
            "client-work.webp",
            "Client Work",
            "Some of our best client collaborations",
            1_048_576,
            "webp",
        ),
        (
            "equipment-setup.jpg",
            "Equipment Setup",
            "Our professional equipment and tools",
            2_621_440,
            "jpg",
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (filename, title, description, size, format))| ImageFile {
            id: (i + 1).to_string(),
            filename: filename.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            file_size: *size,
            thumbnail_url: placeholder("300x200", i, title),
            file_url: format!("https://picsum.photos/800/600?random={}", i + 1),
            folder_id: "photos".to_string(),
            format: format.to_string(),
            width: 800,
            height: 600,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn font(
    id: &str,
    filename: &str,
    title: &str,
    description: &str,
    file_size: u64,
    file_url: &str,
    family: &str,
    weight: &str,
    style: &str,
    uploaded_by: &str,
    uploaded_at: u64,
) -> FontFile {
    let format = filename.rsplit('.').next().unwrap_or_default();
    FontFile {
        id: id.to_string(),
        filename: filename.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        file_size,
        file_url: file_url.to_string(),
        folder_id: "fonts".to_string(),
        format: format.to_string(),
        font_family: family.to_string(),
        font_weight: weight.to_string(),
        font_style: style.to_string(),
        uploaded_by: Some(uploaded_by.to_string()),
        uploaded_at,
    }
}

const ROBOTO_URL: &str = "https://fonts.gstatic.com/s/roboto/v30/KFOmCnqEu92Fr1Mu4mxK.woff2";
const OPEN_SANS_URL: &str = "https://fonts.gstatic.com/s/opensans/v34/memSYaGs126MiZpBA-UvWbX2vVnXBbObj2OVZyOOSr4dVJWUgsjZ0B4gaVIGxA.woff2";

/// Sample fonts shown before the library has been loaded
pub fn mock_fonts() -> Vec<FontFile> {
    vec![
        font(
            "1",
            "studio-64-brand.otf",
            "Studio 64 Brand",
            "Custom brand font for Studio 64",
            245_760,
            ROBOTO_URL,
            "Studio64Brand",
            "400",
            "normal",
            "admin",
            DATES[0],
        ),
        font(
            "2",
            "creative-sans.ttf",
            "Creative Sans",
            "Modern sans-serif for creative projects",
            156_672,
            OPEN_SANS_URL,
            "CreativeSans",
            "300",
            "normal",
            "admin",
            DATES[1],
        ),
        font(
            "3",
            "bold-display.woff2",
            "Bold Display",
            "Heavy display font for headlines",
            32_768,
            "https://fonts.gstatic.com/s/roboto/v30/KFOlCnqEu92Fr1MmWUlfBBc4.woff2",
            "BoldDisplay",
            "700",
            "normal",
            "admin",
            DATES[2],
        ),
        font(
            "4",
            "elegant-serif.woff",
            "Elegant Serif",
            "Classic serif font for body text",
            65_536,
            "https://fonts.gstatic.com/s/playfairdisplay/v30/nuFvD-vYSZviVYUb_rj3ij__anPXJzDwcbmjWBN2PKdFvXDYbtXK-F2qO0s.woff2",
            "ElegantSerif",
            "400",
            "normal",
            "admin",
            DATES[3],
        ),
        font(
            "5",
            "italic-script.otf",
            "Italic Script",
            "Elegant script font for special occasions",
            98_304,
            "https://fonts.gstatic.com/s/dancingscript/v24/If2cXTr6YS-zF4S-kcSWSVi_sxjsohD9F50Ruu7BMSo3Sup8.woff2",
            "ItalicScript",
            "400",
            "italic",
            "admin",
            DATES[4],
        ),
        font(
            "6",
            "monospace-code.ttf",
            "Monospace Code",
            "Monospace font for code and technical content",
            131_072,
            "https://fonts.gstatic.com/s/sourcecodepro/v23/HI_SiYsKILxRpg3hIP6sJ7fM7PqlPevWnsUnxG.woff2",
            "MonospaceCode",
            "400",
            "normal",
            "admin",
            DATES[5],
        ),
    ]
}

/// Two web fonts used when the library turns out to be empty
pub fn fallback_fonts() -> Vec<FontFile> {
    vec![
        font(
            "mock-1",
            "roboto.ttf",
            "Roboto",
            "Mock font for testing (Google Fonts)",
            168_832,
            ROBOTO_URL,
            "Roboto",
            "400",
            "normal",
            "mock-user",
            DATES[0],
        ),
        font(
            "mock-2",
            "open-sans.ttf",
            "Open Sans",
            "Mock font for testing (Google Fonts)",
            156_672,
            OPEN_SANS_URL,
            "Open Sans",
            "300",
            "normal",
            "mock-user",
            DATES[0],
        ),
    ]
}
