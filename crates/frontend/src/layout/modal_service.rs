use leptos::prelude::*;

/// Every dialog in the application, one service to open and close them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    SponsorLogin,
    SponsorRegistration,
    LoginPrompt,
    GuideDetail(u32),
    Info(InfoKind),
}

/// Static informational dialogs reachable from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Faq,
    Cancellation,
    Safety,
    Help,
    About,
    Terms,
    Privacy,
    Cookies,
    Compliance,
}

impl InfoKind {
    pub fn title(&self) -> &'static str {
        match self {
            InfoKind::Faq => "よくあるご質問",
            InfoKind::Cancellation => "キャンセルポリシー",
            InfoKind::Safety => "安全への取り組み",
            InfoKind::Help => "ヘルプ",
            InfoKind::About => "TomoTripについて",
            InfoKind::Terms => "利用規約",
            InfoKind::Privacy => "プライバシーポリシー",
            InfoKind::Cookies => "クッキーポリシー",
            InfoKind::Compliance => "法令遵守",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            InfoKind::Faq => "予約方法、料金、対応言語など、よくあるご質問への回答をまとめています。",
            InfoKind::Cancellation => "予約の3日前まで無料でキャンセルできます。それ以降は料金の50%を申し受けます。",
            InfoKind::Safety => "すべてのガイドは本人確認と研修を経て登録されています。",
            InfoKind::Help => "お困りの際はサポート窓口までご連絡ください。",
            InfoKind::About => "TomoTripは地域のガイドと旅行者をつなぐマーケットプレイスです。",
            InfoKind::Terms => "本サービスの利用にあたっては利用規約への同意が必要です。",
            InfoKind::Privacy => "お預かりした個人情報は法令に基づき適切に管理します。",
            InfoKind::Cookies => "サービス改善のためにクッキーを使用しています。",
            InfoKind::Compliance => "旅行業法をはじめとする関連法令を遵守して運営しています。",
        }
    }
}

/// Backdrop/keyboard behavior per dialog.
#[derive(Debug, Clone, Copy)]
pub struct ModalOptions {
    /// Clicking the backdrop does not close the dialog
    pub static_backdrop: bool,
    /// Escape closes the dialog
    pub keyboard: bool,
}

impl ModalKind {
    pub fn options(&self) -> ModalOptions {
        match self {
            // auth dialogs keep the original static-backdrop behavior
            ModalKind::SponsorLogin | ModalKind::SponsorRegistration | ModalKind::LoginPrompt => {
                ModalOptions {
                    static_backdrop: true,
                    keyboard: true,
                }
            }
            ModalKind::GuideDetail(_) | ModalKind::Info(_) => ModalOptions {
                static_backdrop: false,
                keyboard: true,
            },
        }
    }
}

/// Centralized modal management; replaces the per-page show/hide wiring the
/// legacy pages each reimplemented.
#[derive(Clone, Copy)]
pub struct ModalService {
    active: RwSignal<Option<ModalKind>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    pub fn open(&self, kind: ModalKind) {
        self.active.set(Some(kind));
    }

    /// Close the dialog if `kind` is the one currently shown.
    pub fn close(&self, kind: ModalKind) {
        self.active.update(|active| {
            if *active == Some(kind) {
                *active = None;
            }
        });
    }

    pub fn close_all(&self) {
        self.active.set(None);
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.active.get()
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active.get() == Some(kind)
    }
}
