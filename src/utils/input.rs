use std::io;
use std::io::Write;

pub fn input(prompt: &str) -> String {
    println!("{}", prompt);
    io::stdout().flush().unwrap(); // 确保提示符立即输出

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

/// 读取逗号分隔的课程代码列表，统一转成大写
pub fn input_codes(prompt: &str) -> Vec<String> {
    input(prompt)
        .split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}
