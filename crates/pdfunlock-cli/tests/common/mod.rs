//! Shared PDF fixtures for integration tests.
#![allow(dead_code)]

use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

pub const PAGE_TEXT: &str = "Quarterly figures";

/// PDF standard padding bytes used in encryption key derivation.
const PAD_BYTES: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

fn rc4_transform(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut s: Vec<u8> = (0..=255).collect();
    let mut j: usize = 0;
    for i in 0..256 {
        j = (j + s[i] as usize + key[i % key.len()] as usize) & 0xFF;
        s.swap(i, j);
    }
    let mut out = Vec::with_capacity(data.len());
    let mut i: usize = 0;
    j = 0;
    for &byte in data {
        i = (i + 1) & 0xFF;
        j = (j + s[i] as usize) & 0xFF;
        s.swap(i, j);
        let k = s[(s[i] as usize + s[j] as usize) & 0xFF];
        out.push(byte ^ k);
    }
    out
}

fn content_stream() -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td ({PAGE_TEXT}) Tj ET").into_bytes()
}

fn build_document() -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let content_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {},
        content_stream(),
    )));
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "Font" => dictionary! {
                "F1" => Object::Reference(font_id),
            },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1_i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// A one-page PDF without encryption.
pub fn plain_pdf() -> Vec<u8> {
    let mut doc = build_document();
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// A one-page PDF encrypted with `user_password` (RC4, 40-bit, V=1, R=2).
pub fn encrypted_pdf(user_password: &str) -> Vec<u8> {
    let user_password = user_password.as_bytes();
    let file_id = b"testfileid123456";
    let permissions: i32 = -4;

    let mut padded_pw = Vec::with_capacity(32);
    let pw_len = user_password.len().min(32);
    padded_pw.extend_from_slice(&user_password[..pw_len]);
    padded_pw.extend_from_slice(&PAD_BYTES[..32 - pw_len]);

    let o_key_digest = md5::compute(&padded_pw);
    let o_value = rc4_transform(&o_key_digest[..5], &padded_pw);

    let mut key_input = Vec::with_capacity(128);
    key_input.extend_from_slice(&padded_pw);
    key_input.extend_from_slice(&o_value);
    key_input.extend_from_slice(&(permissions as u32).to_le_bytes());
    key_input.extend_from_slice(file_id);
    let key_digest = md5::compute(&key_input);
    let enc_key = key_digest[..5].to_vec();

    let u_value = rc4_transform(&enc_key, &PAD_BYTES);

    let mut doc = build_document();
    for (&obj_id, obj) in doc.objects.iter_mut() {
        let mut obj_key_input = Vec::with_capacity(10);
        obj_key_input.extend_from_slice(&enc_key);
        obj_key_input.extend_from_slice(&obj_id.0.to_le_bytes()[..3]);
        obj_key_input.extend_from_slice(&obj_id.1.to_le_bytes()[..2]);
        let obj_key_digest = md5::compute(&obj_key_input);
        let obj_key = &obj_key_digest[..(enc_key.len() + 5).min(16)];

        match obj {
            Object::Stream(stream) => {
                let encrypted = rc4_transform(obj_key, &stream.content);
                stream.set_content(encrypted);
            }
            Object::String(content, _) => {
                *content = rc4_transform(obj_key, content);
            }
            _ => {}
        }
    }

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1_i64,
        "R" => 2_i64,
        "Length" => 40_i64,
        "O" => Object::String(o_value, StringFormat::Literal),
        "U" => Object::String(u_value, StringFormat::Literal),
        "P" => permissions as i64,
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(file_id.to_vec(), StringFormat::Literal),
            Object::String(file_id.to_vec(), StringFormat::Literal),
        ]),
    );

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .expect("failed to save encrypted test PDF");
    buf
}

/// Returns `true` if the PDF at `bytes` has an /Encrypt trailer entry.
pub fn is_encrypted(bytes: &[u8]) -> bool {
    Document::load_mem(bytes)
        .map(|doc| doc.trailer.get(b"Encrypt").is_ok())
        .unwrap_or(false)
}

/// Decoded content stream of the first page.
pub fn first_page_content(bytes: &[u8]) -> Vec<u8> {
    let doc = Document::load_mem(bytes).expect("not a PDF");
    let page_id = *doc.get_pages().values().next().expect("no pages");
    doc.get_page_content(page_id).expect("no page content")
}
