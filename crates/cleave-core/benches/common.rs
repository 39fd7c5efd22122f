// Bench helpers; cargo's dead-code pass can't see that sibling bench files
// use these, hence the allow.
#[allow(dead_code)]
pub fn generate_log_lines(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "2026-08-07T12:00:{:02}Z worker-{} finished batch {} in {}ms\n",
            i % 60,
            i % 8,
            i,
            17 + i % 23
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_crlf_records(records: usize) -> String {
    let mut content = String::new();
    for i in 0..records {
        content.push_str(&format!("field-a{i}\tfield-b{i}\tfield-c{i}\r\n"));
    }
    content
}
