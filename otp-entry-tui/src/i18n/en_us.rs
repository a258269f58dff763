//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, EntryTexts, HintTexts, KeyNames, ResultTexts, StatusTexts,
    ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "OTP Entry",
        language: "Language",
        theme: "Theme",
    },

    // ========================================================================
    // 输入页
    // ========================================================================
    entry: EntryTexts {
        title: "Verification",
        heading: "Enter your verification code",
        helper: "We sent a 6-digit code to your device. Enter it below to continue.",
        warning: "Never share this code with anyone.",
        submit: "Verify",
        submitting: "Verifying...",
        retry: "Try again",
        footer_resend: "Didn't get a code? Request a new one",
        footer_help: "Help",
    },

    // ========================================================================
    // 结果页
    // ========================================================================
    result: ResultTexts {
        redirected_title: "Verified",
        redirected_body: "The server sent you on to:",
        loading_title: "Please wait",
        loading_body: "Your code was received. Continuing at:",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        submitting: "Submitting code...",
        incomplete: "Please enter the complete 6-digit code",
        already_submitting: "A submission is already in progress",
        submit_failed: "Submission failed",
        network_error: "Could not reach the server. Press Enter to try again",
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
            type_digit: "Type",
            move_focus: "Move",
            delete: "Delete",
            submit: "Submit",
            retry: "Retry",
            quit: "Quit",
            language: "Language",
            theme: "Theme",
        },
    },

    theme: ThemeTexts {
        dark: "Dark",
        light: "Light",
    },
};
