fn main() {
    if let Err(err) = fixturegen::dummy_users::run() {
        eprintln!("生成Excel文件时出错: {err:#}");
        std::process::exit(1);
    }
}
