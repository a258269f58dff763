//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, EntryTexts, HintTexts, KeyNames, ResultTexts, StatusTexts,
    ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "验证码输入",
        language: "语言",
        theme: "主题",
    },

    // ========================================================================
    // 输入页
    // ========================================================================
    entry: EntryTexts {
        title: "安全验证",
        heading: "请输入验证码",
        helper: "我们已向您的设备发送了 6 位验证码，请在下方输入以继续。",
        warning: "请勿向任何人透露此验证码。",
        submit: "验证",
        submitting: "验证中...",
        retry: "重试",
        footer_resend: "没有收到验证码？重新获取",
        footer_help: "帮助",
    },

    // ========================================================================
    // 结果页
    // ========================================================================
    result: ResultTexts {
        redirected_title: "验证完成",
        redirected_body: "服务器已将您转到：",
        loading_title: "请稍候",
        loading_body: "验证码已收到，即将前往：",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        submitting: "正在提交验证码...",
        incomplete: "请输入完整的 6 位验证码",
        already_submitting: "正在提交中，请稍候",
        submit_failed: "提交失败",
        network_error: "无法连接服务器，按 Enter 重试",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            digits: "0-9",
            arrows_lr: "←→",
            backspace: "Bksp",
            enter: "Enter",
            esc: "Esc",
            alt_l: "Alt+l",
            alt_t: "Alt+t",
        },
        actions: ActionTexts {
            type_digit: "输入",
            move_focus: "移动",
            delete: "删除",
            submit: "提交",
            retry: "重试",
            quit: "退出",
            language: "语言",
            theme: "主题",
        },
    },

    theme: ThemeTexts {
        dark: "深色",
        light: "浅色",
    },
};
