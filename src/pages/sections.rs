use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::compare::CompareSlider;
use crate::components::widgets::{Badge, CircleGauge, Pill};
use crate::config;
use crate::content::{
    self, AGENDA, BONUSES, CHAPTERS, FEATURE_CARDS, SHOWCASE_AFTER, SHOWCASE_BEFORE, SPEAKERS,
    TESTIMONIALS,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header id="top" class="section hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <Badge text="建築リーダー向け実務集中セミナー 2025.09.28" />
                    <h1 class="hero-title">{"実務で使える"}<br/>{"AI×建築セミナー 2025"}</h1>
                    <p class="hero-lead">
                        {"生成AIとBIMを掛け合わせた最新の建築ワークフローを、6時間で体得する集中プログラム。設計・施工・DXのキープレイヤーが、現場導入のリアルな成功例と落とし穴を共有します。"}
                    </p>
                    <dl class="hero-facts">
                        <div class="hero-fact">
                            <dt>{"開催日程"}</dt>
                            <dd>{"2025年9月28日（日）13:00-16:30"}</dd>
                        </div>
                        <div class="hero-fact">
                            <dt>{"会場"}</dt>
                            <dd>{"オンライン（ライブ配信）+ アーカイブ視聴（14日間）"}</dd>
                        </div>
                        <div class="hero-fact">
                            <dt>{"対象"}</dt>
                            <dd>{"設計・デザインファーム、ゼネコン・サブコン、デベロッパー、DX推進部門"}</dd>
                        </div>
                        <div class="hero-fact">
                            <dt>{"定員"}</dt>
                            <dd>{"先着 120 名（法人申込可）"}</dd>
                        </div>
                    </dl>
                    <div class="hero-cta-group">
                        <a href="#resources" class="hero-cta">{"招待コードで申し込む"}</a>
                        <span class="hero-code">
                            {"招待コード: "}<strong>{config::INVITE_CODE}</strong>
                        </span>
                    </div>
                </div>
                <div class="hero-panel">
                    <p class="panel-eyebrow">{"このセミナーで得られること"}</p>
                    <ul class="dot-list">
                        <li>{"企画設計から実施設計まで AI を組み込んだ最新ワークフローを生解説。"}</li>
                        <li>{"社内ガイドライン策定に使えるテンプレートとチェックリストを提供。"}</li>
                        <li>{"導入後30日で成果を出すためのロードマップと KPI 設計の考え方を共有。"}</li>
                    </ul>
                    <div class="hero-note">
                        <p class="hero-note-title">{"早期申込特典"}</p>
                        <p>{"9/1 までの申込で 1on1 実装相談（30 分）を追加提供。"}</p>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component(Highlights)]
pub fn highlights() -> Html {
    html! {
        <section id="highlights" class="section">
            <div class="card-grid three">
                { for FEATURE_CARDS.iter().map(|card| html! {
                    <div class="card">
                        <p class="panel-eyebrow">{"Feature"}</p>
                        <h2 class="card-title">{card.title}</h2>
                        <p class="card-body">{card.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Program)]
pub fn program() -> Html {
    html! {
        <section id="program" class="section">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="panel-eyebrow">{"Agenda"}</p>
                        <h2 class="panel-title">{"6時間で押さえる実務フロー"}</h2>
                        <p class="panel-lead">
                            {"ワークフローの各ステップを、操作デモと「そのまま使える資料」で習得。AIの活用可否判断や、各部署での合意形成に必要な情報を揃えます。"}
                        </p>
                    </div>
                    <Pill text="休憩含む / ライブQAあり" />
                </div>
                <div class="agenda-list">
                    { for AGENDA.iter().map(|block| html! {
                        <div class="agenda-block">
                            <div class="agenda-time">
                                <span>{block.time}</span>
                                <span class="agenda-rule"></span>
                            </div>
                            <div>
                                <h3 class="agenda-title">{block.title}</h3>
                                <p class="agenda-desc">{block.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Voices)]
pub fn voices() -> Html {
    html! {
        <section id="voices" class="section">
            <div class="split two-three">
                <div class="panel">
                    <p class="panel-eyebrow">{"For Team"}</p>
                    <h2 class="panel-title">{"こんな課題を持つチームへ"}</h2>
                    <ul class="dot-list">
                        <li>{"生成AI導入を検討中だが、ROI や社内規程の整理で足踏みしている。"}</li>
                        <li>{"複数部署でバラバラにAIツールを試しており、統一したナレッジが作れていない。"}</li>
                        <li>{"顧客・審査向けの説明責任に耐える証跡の残し方が分からない。"}</li>
                    </ul>
                    <div class="hero-note">
                        <p class="hero-note-title">{"成果保証サポート"}</p>
                        <p>{"研修後30日間のメール相談付き。社内稟議資料のレビューも対応します。"}</p>
                    </div>
                </div>
                <div class="panel">
                    <p class="panel-eyebrow">{"Case Study"}</p>
                    <h2 class="panel-title">{"導入企業の声"}</h2>
                    <div class="testimonial-list">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial">
                                <p class="testimonial-quote">{format!("「{}」", t.quote)}</p>
                                <p class="testimonial-source">{t.source}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(SpeakersSection)]
pub fn speakers_section() -> Html {
    html! {
        <section id="speakers" class="section">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="panel-eyebrow">{"Speakers"}</p>
                        <h2 class="panel-title">{"現場で成果を出してきた講師陣"}</h2>
                    </div>
                    <p class="panel-lead narrow">
                        {"建築実務とAI活用の両方に精通したプロフェッショナルが、現場目線のノウハウと失敗事例を包み隠さず共有します。"}
                    </p>
                </div>
                <div class="card-grid three">
                    { for SPEAKERS.iter().map(|speaker| html! {
                        <article class="card speaker-card">
                            <div>
                                <h3 class="card-title">{speaker.name}</h3>
                                <p class="speaker-role">{speaker.title}</p>
                            </div>
                            <p class="card-body">{speaker.bio}</p>
                            <div class="pill-row">
                                { for speaker.expertise.iter().map(|tag| html! {
                                    <Pill text={*tag} />
                                }) }
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChapterIndexProps {
    pub current: &'static str,
    pub on_select: Callback<&'static str>,
}

#[function_component(ChapterIndex)]
pub fn chapter_index(props: &ChapterIndexProps) -> Html {
    html! {
        <section id="chapters" class="section">
            <div class="panel">
                <p class="panel-eyebrow">{"Chapters"}</p>
                <h2 class="panel-title">{"チャプター一覧"}</h2>
                <ol class="chapter-index">
                    { for CHAPTERS.iter().map(|chapter| {
                        let on_select = props.on_select.clone();
                        let id = chapter.id;
                        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id));
                        let active = props.current == chapter.id;
                        html! {
                            <li>
                                <button
                                    class={classes!("chapter-link", active.then_some("active"))}
                                    {onclick}
                                >
                                    <span class="chapter-no">{format!("{:02}", chapter.number)}</span>
                                    <span>{chapter.title}</span>
                                    if let Some(minutes) = content::minutes_for(chapter.id) {
                                        <span class="chapter-minutes">{format!("{minutes}分")}</span>
                                    }
                                </button>
                            </li>
                        }
                    }) }
                </ol>
            </div>
        </section>
    }
}

#[function_component(ChapterCards)]
pub fn chapter_cards() -> Html {
    html! {
        <>
        { for CHAPTERS.iter().map(|chapter| {
            let detail = content::chapter_content(chapter.id);
            html! {
                <section id={chapter.id} class="section">
                    <div class="panel chapter-card">
                        <div class="panel-head">
                            <div>
                                if let Some(label) = detail.and_then(|c| c.label) {
                                    <Badge text={label} />
                                }
                                <h2 class="panel-title">
                                    {format!("{:02}. {}", chapter.number, chapter.title)}
                                </h2>
                            </div>
                            if let Some(minutes) = content::minutes_for(chapter.id) {
                                <CircleGauge value={minutes} max={50} label="分" />
                            }
                        </div>
                        if let Some(detail) = detail {
                            <ul class="dot-list chapter-bullets">
                                { for detail.bullets.iter().map(|b| html! { <li>{*b}</li> }) }
                            </ul>
                        }
                    </div>
                </section>
            }
        }) }
        </>
    }
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    html! {
        <section id="showcase" class="section">
            <div class="panel">
                <p class="panel-eyebrow">{"Showcase"}</p>
                <h2 class="panel-title">{"AI質感調整の前後比較"}</h2>
                <p class="panel-lead">{"スライダーを左右に動かして、一次生成と調整後の違いをご覧ください。"}</p>
                <CompareSlider before={SHOWCASE_BEFORE} after={SHOWCASE_AFTER} />
            </div>
        </section>
    }
}

#[function_component(Resources)]
pub fn resources() -> Html {
    html! {
        <section id="resources" class="section">
            <div class="split three-two">
                <div class="panel">
                    <p class="panel-eyebrow">{"Special Bundle"}</p>
                    <h2 class="panel-title">{"受講特典とフォローアップ"}</h2>
                    <p class="panel-lead">
                        {"即日社内展開できる資料セットとフォローアップで、研修後のアクションまで伴走します。招待コード経由の受講者限定で提供します。"}
                    </p>
                    <ul class="card-grid two bonus-list">
                        { for BONUSES.iter().map(|bonus| html! {
                            <li class="card">
                                <p class="card-title small">{bonus.title}</p>
                                <p class="card-body small">{bonus.description}</p>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="stack">
                    <div class="panel entry-panel">
                        <p class="panel-eyebrow">{"Entry"}</p>
                        <h3 class="panel-title">{"参加費"}</h3>
                        <p class="price">{"税込 39,600 円 / 名"}</p>
                        <p class="fine-print">
                            {"法人申込は同一アカウントで最大 5 名まで視聴可能。請求書払い / クレジットカード対応。"}
                        </p>
                        <ul class="fine-list">
                            <li>{"・アーカイブ視聴リンクを 24 時間以内に送付"}</li>
                            <li>{"・社内共有用の抜粋スライドを提供"}</li>
                            <li>{"・講師への個別相談（1 回 / 30 分）"}</li>
                        </ul>
                    </div>
                    <div class="panel">
                        <p class="panel-eyebrow">{"Registration"}</p>
                        <h3 class="panel-title">{"申込方法"}</h3>
                        <ol class="step-list">
                            <li>{"申込フォームで招待コード "}<strong>{config::INVITE_CODE}</strong>{" を入力"}</li>
                            <li>{"担当者より 1 営業日以内に詳細案内を送付"}</li>
                            <li>{"支払い手続き完了後に視聴リンクを案内"}</li>
                        </ol>
                        <a
                            class="hero-cta wide"
                            href="mailto:seminar@archi-prisma.co.jp?subject=AI×建築セミナー申込"
                        >
                            {"メールで申し込む"}
                        </a>
                        <p class="fine-print">{"※ 招待コード未入力の場合は確認のご連絡を差し上げます。"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FooterBar)]
pub fn footer_bar() -> Html {
    html! {
        <footer class="footer">
            <p>{"© 2025 Archi Prisma Inc. All rights reserved."}</p>
            <div class="footer-links">
                <a href="https://archi-prisma.co.jp" target="_blank" rel="noreferrer">{"コーポレートサイト"}</a>
                <a href="mailto:contact@archi-prisma.co.jp">{"お問い合わせ"}</a>
                <a href="/public/terms.pdf">{"受講規約"}</a>
            </div>
        </footer>
    }
}
