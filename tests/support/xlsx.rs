//! Minimal `.xlsx` writer for workbook fixtures.

use std::io::Write;
use std::path::Path;

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::fixtures::SheetRows;

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Write `sheets` to `path`. Cells that parse as numbers are stored as numbers,
/// empty strings are left out, everything else goes to the shared string table.
pub fn write_workbook(path: &Path, sheets: &[SheetRows]) {
    let file = std::fs::File::create(path).expect("create workbook");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let mut shared: Vec<String> = Vec::new();

    let put = |zip: &mut ZipWriter<std::fs::File>, name: &str, body: String| {
        zip.start_file(name, options).expect("start zip entry");
        zip.write_all(body.as_bytes()).expect("write zip entry");
    };

    let mut sheet_xml = Vec::new();
    for (_, headers, rows) in sheets {
        let grid = std::iter::once(*headers).chain(rows.iter().copied());
        let mut body = String::new();
        for (row_index, row) in grid.enumerate() {
            let row_number = row_index + 1;
            body.push_str(&format!("<row r=\"{row_number}\">"));
            for (col_index, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let reference = format!("{}{row_number}", column_letter(col_index));
                if value.parse::<f64>().is_ok() {
                    body.push_str(&format!("<c r=\"{reference}\"><v>{value}</v></c>"));
                } else {
                    let index = shared.iter().position(|s| s == value).unwrap_or_else(|| {
                        shared.push(value.to_string());
                        shared.len() - 1
                    });
                    body.push_str(&format!("<c r=\"{reference}\" t=\"s\"><v>{index}</v></c>"));
                }
            }
            body.push_str("</row>");
        }
        sheet_xml.push(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <worksheet xmlns=\"{MAIN_NS}\"><sheetData>{body}</sheetData></worksheet>"
        ));
    }

    let mut overrides = String::new();
    let mut entries = String::new();
    let mut rels = String::new();
    for (index, (name, _, _)) in sheets.iter().enumerate() {
        let n = index + 1;
        overrides.push_str(&format!(
            "<Override PartName=\"/xl/worksheets/sheet{n}.xml\" \
             ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>"
        ));
        entries.push_str(&format!(
            "<sheet name=\"{}\" sheetId=\"{n}\" r:id=\"rId{n}\"/>",
            escape(name)
        ));
        rels.push_str(&format!(
            "<Relationship Id=\"rId{n}\" Type=\"{REL_NS}/worksheet\" Target=\"worksheets/sheet{n}.xml\"/>"
        ));
    }
    let shared_rel = sheets.len() + 1;
    rels.push_str(&format!(
        "<Relationship Id=\"rId{shared_rel}\" Type=\"{REL_NS}/sharedStrings\" Target=\"sharedStrings.xml\"/>"
    ));

    put(
        &mut zip,
        "[Content_Types].xml",
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
             <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
             <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
             <Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
             <Override PartName=\"/xl/sharedStrings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml\"/>\
             {overrides}</Types>"
        ),
    );
    put(
        &mut zip,
        "_rels/.rels",
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Relationships xmlns=\"{PKG_REL_NS}\">\
             <Relationship Id=\"rId1\" Type=\"{REL_NS}/officeDocument\" Target=\"xl/workbook.xml\"/>\
             </Relationships>"
        ),
    );
    put(
        &mut zip,
        "xl/workbook.xml",
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <workbook xmlns=\"{MAIN_NS}\" xmlns:r=\"{REL_NS}\"><sheets>{entries}</sheets></workbook>"
        ),
    );
    put(
        &mut zip,
        "xl/_rels/workbook.xml.rels",
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Relationships xmlns=\"{PKG_REL_NS}\">{rels}</Relationships>"
        ),
    );
    for (index, xml) in sheet_xml.into_iter().enumerate() {
        put(&mut zip, &format!("xl/worksheets/sheet{}.xml", index + 1), xml);
    }
    let strings: String = shared
        .iter()
        .map(|value| format!("<si><t>{}</t></si>", escape(value)))
        .collect();
    put(
        &mut zip,
        "xl/sharedStrings.xml",
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <sst xmlns=\"{MAIN_NS}\" count=\"{n}\" uniqueCount=\"{n}\">{strings}</sst>",
            n = shared.len()
        ),
    );
    zip.finish().expect("finish workbook");
}

fn column_letter(index: usize) -> char {
    assert!(index < 26, "fixture sheets stay within column Z");
    (b'A' + index as u8) as char
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
