// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）、英文、西班牙文
// 语言按请求传入（t_in），不使用进程级全局语言
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 已加载的语言列表
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// 解析请求语言
///
/// # 规则
/// - 请求语言在已加载列表中: 使用请求语言
/// - 只匹配主语言（如 "en-US" → "en", "es-MX" → "es"）
/// - 否则使用 fallback
pub fn resolve_locale(requested: Option<&str>, fallback: &str) -> String {
    let available = available_locales();
    let Some(requested) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback.to_string();
    };

    if let Some(exact) = available
        .iter()
        .find(|l| l.eq_ignore_ascii_case(requested))
    {
        return exact.to_string();
    }

    let primary = requested.split(['-', '_']).next().unwrap_or(requested);
    available
        .iter()
        .find(|l| l.eq_ignore_ascii_case(primary))
        .map(|l| l.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn fill_args(mut message: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        message = message.replace(&placeholder, v);
    }
    message
}

/// 按指定语言翻译（带参数）
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    fill_args(rust_i18n::t!(key, locale = locale).to_string(), args)
}
