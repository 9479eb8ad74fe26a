use leptos::prelude::*;

/// Footer link groups; every link dispatches through `data-action`.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-column">
                <h6>"サポート"</h6>
                <a href="#" data-action="show-faq">"よくあるご質問"</a>
                <a href="#" data-action="show-cancellation">"キャンセルポリシー"</a>
                <a href="#" data-action="show-safety">"安全への取り組み"</a>
                <a href="#" data-action="show-payment-help">"お支払いについて"</a>
                <a href="#" data-action="show-help">"ヘルプ"</a>
            </div>
            <div class="footer-column">
                <h6>"ガイドの方へ"</h6>
                <a href="#" data-action="show-guide-registration-help">"ガイド登録について"</a>
                <a href="#" data-action="show-profile-optimization">"プロフィール改善のヒント"</a>
                <a href="#" data-action="show-earnings-dashboard">"収益ダッシュボード"</a>
                <a href="#" data-action="show-guide-resources">"ガイド向け資料"</a>
            </div>
            <div class="footer-column">
                <h6>"TomoTrip"</h6>
                <a href="#" data-action="show-about">"TomoTripについて"</a>
                <a href="#" data-action="show-terms">"利用規約"</a>
                <a href="#" data-action="show-privacy">"プライバシーポリシー"</a>
                <a href="#" data-action="show-cookies">"クッキーポリシー"</a>
                <a href="#" data-action="show-compliance">"法令遵守"</a>
                <a href="#" data-action="show-cookie-settings">"クッキー設定"</a>
            </div>
        </footer>
    }
}
