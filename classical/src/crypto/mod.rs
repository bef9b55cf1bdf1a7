pub mod caesar;
pub mod vigenere;

/// Сдвиг одной ASCII-буквы по модулю 26 с сохранением регистра.
/// Остальные символы возвращаются без изменений.
#[inline]
pub(crate) fn shift_letter(ch: char, shift: u8) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let pos = ch as u8 - base;
    ((pos + shift % 26) % 26 + base) as char
}
