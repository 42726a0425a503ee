use super::error::GeoError;
use super::Location;

const BLOCK_START: &str = "<div id=\"IpAddress\">";
const BLOCK_END: &str = "</div>";
const LABEL_SEPARATOR: char = '：';

const PROVINCE_MARKERS: [char; 2] = ['省', '区'];
const CITY_MARKERS: [char; 4] = ['市', '州', '盟', '区'];

/// Extract the locality text from the provider page.
///
/// The page carries one `<div id="IpAddress">` whose text, after a
/// full-width colon, reads like `黑龙江省哈尔滨市`. The province runs up
/// to and including its marker character, the city up to and including
/// its own; text matching neither pattern is kept whole in `other`.
pub(crate) fn location(html: &str) -> Result<Location, GeoError> {
    let start = html.find(BLOCK_START).ok_or(GeoError::MissingAddress)? + BLOCK_START.len();
    let end = html[start..].find(BLOCK_END).ok_or(GeoError::MissingAddress)? + start;

    let text = &html[start..end];
    let text = match text.find(LABEL_SEPARATOR) {
        Some(at) => &text[at + LABEL_SEPARATOR.len_utf8()..],
        None => text,
    };
    let chars: Vec<char> = text.trim().chars().collect();

    let mut location = Location::default();
    match chars.iter().position(|c| PROVINCE_MARKERS.contains(c)) {
        Some(province_end) => {
            location.province = chars[..=province_end].iter().collect();
            let rest = &chars[province_end + 1..];
            match rest.iter().position(|c| CITY_MARKERS.contains(c)) {
                Some(city_end) => location.city = rest[..=city_end].iter().collect(),
                None => location.other = rest.iter().collect(),
            }
        }
        None => location.other = chars.iter().collect(),
    }
    Ok(location)
}
