//! Static content registry for the seminar page.
//!
//! Everything here is author-curated data fixed at build time. Rendering
//! components look values up by identifier; a missing optional lookup is a
//! display-level fallback, never an error.

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Chapter {
    pub number: u32,
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct ChapterContent {
    pub id: &'static str,
    pub label: Option<&'static str>,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    pub notes: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct AgendaBlock {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Speaker {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub expertise: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Bonus {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub source: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Figure {
    pub src: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Toggle {
    pub summary: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub at: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: &'static str,
    pub unit: &'static str,
    pub max: u32,
    pub bars: &'static [Bar],
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct TableSpec {
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub enum Media {
    Stack(&'static [Figure]),
    Grid(&'static [Figure]),
    Compare { before: Figure, after: Figure },
}

#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Slide {
    pub id: &'static str,
    /// Chapter this slide belongs to, for the presenter notes overlay.
    pub chapter: Option<&'static str>,
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub lines: &'static [&'static str],
    pub goal: Option<&'static str>,
    pub facts: &'static [Fact],
    pub toggles: &'static [Toggle],
    pub timeline: &'static [TimelineEntry],
    pub chart: Option<ChartSpec>,
    pub table: Option<TableSpec>,
    pub footnotes: &'static [&'static str],
    pub background: Option<&'static str>,
    pub media: Option<Media>,
}

/// Flattened section-id list, in page order. Constant for a given build and
/// never empty; every navigation index is clamped against its length.
pub static SECTION_IDS: &[&str] = &[
    "top",
    "highlights",
    "program",
    "voices",
    "speakers",
    "chapters",
    "ch-01",
    "ch-02",
    "ch-03",
    "ch-04",
    "ch-05",
    "showcase",
    "resources",
];

pub static CHAPTERS: &[Chapter] = &[
    Chapter { number: 1, id: "ch-01", title: "イントロダクション & 未来像" },
    Chapter { number: 2, id: "ch-02", title: "AIモデリングワークフロー演習" },
    Chapter { number: 3, id: "ch-03", title: "BIM/設計DX連携ハンズオン" },
    Chapter { number: 4, id: "ch-04", title: "AI審査対応とリスクマネジメント" },
    Chapter { number: 5, id: "ch-05", title: "ケーススタディ & Q&A" },
];

pub static CHAPTER_CONTENTS: &[ChapterContent] = &[
    ChapterContent {
        id: "ch-01",
        label: Some("13:00"),
        title: "イントロダクション & 未来像",
        bullets: &[
            "国内外の最新事例から、建築×AIで変わる実務フローを俯瞰",
            "2025年以降を見据えた導入ロードマップの全体像",
            "「どこにAIを使わないか」を決める判断基準",
            "ROI試算の考え方と社内説明のフレーム",
        ],
        notes: "導入の温度感を最初に合わせる。参加者の所属・役割を簡単に挙手で確認し、事例の深さを調整する。ロードマップ図は配布資料の p.4 を参照させる。",
    },
    ChapterContent {
        id: "ch-02",
        label: Some("13:40"),
        title: "AIモデリングワークフロー演習",
        bullets: &[
            "敷地条件からコンセプト立案、質感調整までを AIGC ツールの組み合わせでデモ",
            "プロンプトの構造化: 敷地・法規・意匠条件の分離",
            "設計支援AIの限界値と、人が判断を残すべき箇所",
            "生成結果のバージョン管理と比較レビューの型",
        ],
        notes: "ライブデモ中心。生成待ちの時間に質問を受ける。比較スライダーで Before/After を見せるタイミングは質感調整の直後。",
    },
    ChapterContent {
        id: "ch-03",
        label: Some("14:30"),
        title: "BIM/設計DX連携ハンズオン",
        bullets: &[
            "BIM・構造・設備チームへの連携方法をライブで紹介",
            "社内ナレッジを埋め込むプロンプト設計と品質管理",
            "BIMソフト別の差分管理と往復コストの抑え方",
            "チェックリストを使った初動レビューの進め方",
        ],
        notes: "ハンズオンは配布のチェックリストに沿って進める。環境が動かない参加者にはデモ画面の追走を案内。",
    },
    ChapterContent {
        id: "ch-04",
        label: Some("15:20"),
        title: "AI審査対応とリスクマネジメント",
        bullets: &[
            "発注者・審査プロセスで求められる説明責任の整理",
            "生成プロセスのログ管理と証跡の残し方",
            "社内ガイドライン策定のステップと合意形成",
            "著作権・データ取り扱いの実務上の注意点",
        ],
        notes: "法務の細部には踏み込みすぎない。ガイドライン雛形の章立てを見せ、持ち帰って使える形を強調する。",
    },
    ChapterContent {
        id: "ch-05",
        label: Some("16:00"),
        title: "ケーススタディ & Q&A",
        bullets: &[
            "導入半年で成果を出した企業のナレッジを共有",
            "つまずきやすいポイントと回避策",
            "参加者の課題に沿った導入ロードマップをその場で提案",
        ],
        notes: "Q&A はチャットと挙手の両方から拾う。時間が余れば KPI 設計の補足スライドへ。",
    },
];

/// Display-only minute budgets per section. Never affects control flow.
static TIMINGS: &[(&str, u32)] = &[
    ("ch-01", 40),
    ("ch-02", 50),
    ("ch-03", 50),
    ("ch-04", 40),
    ("ch-05", 30),
    ("program", 5),
    ("resources", 5),
];

pub static AGENDA: &[AgendaBlock] = &[
    AgendaBlock {
        time: "13:00",
        title: "イントロダクション & 未来像",
        description: "国内外の最新事例とともに、建築×AIで変わる実務フローを俯瞰。2025年以降を見据えたロードマップを共有します。",
    },
    AgendaBlock {
        time: "13:40",
        title: "AIモデリングワークフロー演習",
        description: "敷地条件からコンセプト立案、質感調整までを AIGC ツールの組み合わせでデモ。設計支援AIの限界値と注意点を解説。",
    },
    AgendaBlock {
        time: "14:30",
        title: "BIM/設計DX連携ハンズオン",
        description: "BIM・構造・設備チームへの連携方法をライブで紹介。社内ナレッジを埋め込むプロンプト設計と品質管理を学びます。",
    },
    AgendaBlock {
        time: "15:20",
        title: "AI審査対応とリスクマネジメント",
        description: "発注者・審査プロセスで求められる説明責任を整理。生成プロセスのログ管理やガイドライン策定のステップを提示。",
    },
    AgendaBlock {
        time: "16:00",
        title: "ケーススタディ & Q&A",
        description: "導入半年で成果を出した企業のナレッジを共有。参加者の課題に沿った導入ロードマップをその場で提案します。",
    },
];

pub static SPEAKERS: &[Speaker] = &[
    Speaker {
        name: "高瀬 玲奈",
        title: "アーキプリズマ株式会社 AIストラテジスト",
        bio: "大手ゼネコンで設計・施工を経験後、AI活用組織を立ち上げ。生成AIとBIMの統合プロジェクトを多数リード。",
        expertise: &["生成AI戦略", "BIM連携", "社内人材育成"],
    },
    Speaker {
        name: "大谷 響",
        title: "建築デザインファーム PRINCIPAL",
        bio: "建築ビジュアライゼーション専門家。海外コンペで受賞歴多数。AIツールによるビジュアル制作フローを最適化。",
        expertise: &["ビジュアライゼーション", "レンダリングAI", "クオリティ管理"],
    },
    Speaker {
        name: "柚木 悠",
        title: "DX推進コンサルタント",
        bio: "建設テック企業でプロダクト責任者を務め、建築現場向けAIアシスタントを開発。コンプライアンス支援が専門。",
        expertise: &["規制対応", "AIガバナンス", "業務設計"],
    },
];

pub static BONUSES: &[Bonus] = &[
    Bonus {
        title: "AIプロンプトテンプレート集（70種）",
        description: "用途別（企画・設計・法規・積算）に最適化されたテンプレートを提供。社内展開用に修正可能なドキュメント形式。",
    },
    Bonus {
        title: "BIM連携チェックリスト",
        description: "BIMソフト別に考慮すべきパラメータや、AI生成モデルの差分管理手法を一覧化。プロジェクト初動で活用できます。",
    },
    Bonus {
        title: "社内導入ロードマップ雛形",
        description: "社内教育・パイロット・展開までの3ヶ月プランをテンプレート化。ガバナンス面の合意形成資料としても使えます。",
    },
];

pub static FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "実務課題から設計",
        description: "現場のボトルネックをヒアリングしながら、生成AIが活きる領域を可視化。現実的なROI算出方法も解説します。",
    },
    FeatureCard {
        title: "1日で流れを体得",
        description: "コンセプト作成→モデリング→プレゼン資料化までのワークフローを「操作＋解説」で一気通貫に学習します。",
    },
    FeatureCard {
        title: "社内展開シナリオ付き",
        description: "研修後30日間で社内に横展開するためのナレッジ共有フローと KPI 設計例をセットで提供します。",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "社内でバラバラだったAI活用が1ヶ月でガイドライン化。審査への説明資料も整い、プロポーザルでの訴求力が上がりました",
        source: "大手デベロッパー DX推進部",
    },
    Testimonial {
        quote: "生成AIとBIM連携の実演がスムーズで、チーム全体のモチベーションが向上。導入後のサポートも手厚かったです",
        source: "準大手ゼネコン 設計部",
    },
    Testimonial {
        quote: "AI対応の審査書式が整い、発注者とのやり取りが高速化。品質管理と説明責任を両立できました",
        source: "建築デザイン事務所 代表",
    },
];

pub const SHOWCASE_BEFORE: Figure =
    Figure { src: "assets/render-before.webp", caption: "調整前（一次生成）" };
pub const SHOWCASE_AFTER: Figure =
    Figure { src: "assets/render-after.webp", caption: "調整後（質感・光源補正）" };

pub static SLIDES: &[Slide] = &[
    Slide {
        id: "s-00",
        chapter: None,
        title: Some("実務で使える AI×建築セミナー 2025"),
        subtitle: Some("2025年9月28日（日）13:00-16:30 / オンライン"),
        lines: &["建築リーダー向け実務集中セミナー", "アーキプリズマ株式会社"],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &[],
        background: Some("cover"),
        media: None,
    },
    Slide {
        id: "s-01",
        chapter: None,
        title: Some("本日のゴール"),
        subtitle: None,
        lines: &[
            "AIを組み込んだ建築ワークフローを一気通貫で体得する",
            "持ち帰ってすぐ使える資料と判断基準を揃える",
        ],
        goal: Some("「明日から社内で説明できる」状態で帰ること"),
        facts: &[
            Fact { label: "講義時間", value: "3.5時間" },
            Fact { label: "チャプター", value: "5章" },
            Fact { label: "配布資料", value: "3点" },
        ],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &[],
        background: None,
        media: None,
    },
    Slide {
        id: "s-02",
        chapter: None,
        title: Some("本日のロードマップ"),
        subtitle: None,
        lines: &["休憩を挟みつつ、演習と解説を交互に進めます。"],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[
            TimelineEntry { at: "13:00", label: "イントロダクション & 未来像" },
            TimelineEntry { at: "13:40", label: "AIモデリングワークフロー演習" },
            TimelineEntry { at: "14:30", label: "BIM/設計DX連携ハンズオン" },
            TimelineEntry { at: "15:20", label: "AI審査対応とリスクマネジメント" },
            TimelineEntry { at: "16:00", label: "ケーススタディ & Q&A" },
        ],
        chart: None,
        table: None,
        footnotes: &[],
        background: None,
        media: None,
    },
    Slide {
        id: "s-03",
        chapter: Some("ch-01"),
        title: Some("建築実務でのAI導入はどこまで来たか"),
        subtitle: Some("Chapter 1"),
        lines: &[
            "企画・プレゼン段階の活用が先行、審査対応は発展途上",
            "ツール単体ではなく「フローの組み替え」が成果を分ける",
        ],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: Some(ChartSpec {
            title: "工程別のAI活用率（当社調査）",
            unit: "%",
            max: 100,
            bars: &[
                Bar { label: "企画・コンセプト", value: 72 },
                Bar { label: "ビジュアル制作", value: 64 },
                Bar { label: "実施設計", value: 38 },
                Bar { label: "審査・申請", value: 17 },
            ],
        }),
        table: None,
        footnotes: &["2025年7月 受講企業アンケート n=118"],
        background: None,
        media: None,
    },
    Slide {
        id: "s-04",
        chapter: Some("ch-02"),
        title: Some("モデリングワークフロー演習"),
        subtitle: Some("Chapter 2"),
        lines: &[
            "敷地条件の読み込み → コンセプト展開 → 質感調整",
            "プロンプトは「敷地・法規・意匠」の3レイヤーに分離する",
        ],
        goal: None,
        facts: &[],
        toggles: &[
            Toggle {
                summary: "使用ツールの構成",
                body: "コンセプト展開は画像生成系、形状検討はパラメトリック系、質感調整はアップスケーラを併用。単一ツールで完結させない。",
            },
            Toggle {
                summary: "生成結果の管理",
                body: "生成物はプロンプトと乱数シードをセットで保存。比較レビューは同条件の差分のみで行う。",
            },
        ],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &[],
        background: None,
        media: None,
    },
    Slide {
        id: "s-05",
        chapter: Some("ch-02"),
        title: Some("質感調整の前後比較"),
        subtitle: Some("Chapter 2"),
        lines: &["スライダーを左右に動かすと、調整前後を比較できます。"],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &[],
        background: None,
        media: Some(Media::Compare { before: SHOWCASE_BEFORE, after: SHOWCASE_AFTER }),
    },
    Slide {
        id: "s-06",
        chapter: Some("ch-03"),
        title: Some("BIM連携の初動チェック"),
        subtitle: Some("Chapter 3"),
        lines: &["ソフト別に「渡せるもの・渡せないもの」を先に確定させる。"],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: Some(TableSpec {
            headers: &["確認項目", "意匠", "構造", "設備"],
            rows: &[
                &["形状データの受け渡し", "◎", "○", "○"],
                &["属性情報の保持", "○", "◎", "◎"],
                &["AI生成モデルの差分管理", "◎", "△", "△"],
                &["往復レビューの頻度", "週2", "週1", "週1"],
            ],
        }),
        footnotes: &["◎=そのまま使える / ○=変換が必要 / △=手動確認が必要"],
        background: None,
        media: None,
    },
    Slide {
        id: "s-07",
        chapter: Some("ch-04"),
        title: Some("審査対応とリスクの整理"),
        subtitle: Some("Chapter 4"),
        lines: &[
            "生成プロセスのログを「いつ・誰が・何を」の粒度で残す",
            "ガイドラインは禁止事項より判断フローを中心に書く",
        ],
        goal: None,
        facts: &[
            Fact { label: "ログ保存期間", value: "5年" },
            Fact { label: "雛形の章立て", value: "7章" },
        ],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &["著作権の詳細は配布資料の別紙を参照"],
        background: None,
        media: None,
    },
    Slide {
        id: "s-08",
        chapter: Some("ch-05"),
        title: Some("導入半年の成果"),
        subtitle: Some("Chapter 5"),
        lines: &["パイロット3案件での工数変化。レビュー工数は一時的に増える。"],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: Some(ChartSpec {
            title: "工程別の工数削減率",
            unit: "%",
            max: 60,
            bars: &[
                Bar { label: "コンセプト立案", value: 45 },
                Bar { label: "ビジュアル制作", value: 52 },
                Bar { label: "社内レビュー", value: 8 },
            ],
        }),
        table: None,
        footnotes: &["受講企業ヒアリングより。案件規模により変動します。"],
        background: None,
        media: None,
    },
    Slide {
        id: "s-09",
        chapter: None,
        title: Some("受講特典"),
        subtitle: None,
        lines: &[
            "AIプロンプトテンプレート集（70種）",
            "BIM連携チェックリスト",
            "社内導入ロードマップ雛形",
        ],
        goal: None,
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &["招待コード経由の受講者限定"],
        background: None,
        media: Some(Media::Grid(&[
            Figure { src: "assets/bonus-prompts.webp", caption: "プロンプトテンプレート集" },
            Figure { src: "assets/bonus-checklist.webp", caption: "BIM連携チェックリスト" },
            Figure { src: "assets/bonus-roadmap.webp", caption: "導入ロードマップ雛形" },
        ])),
    },
    Slide {
        id: "s-10",
        chapter: None,
        title: Some("まとめ"),
        subtitle: None,
        lines: &[
            "AIは工程の置き換えではなく、判断の前倒しに使う",
            "30日で社内展開するロードマップを今日から動かす",
            "質問はフォローアップ窓口までいつでもどうぞ",
        ],
        goal: Some("研修後30日間のメール相談をご活用ください"),
        facts: &[],
        toggles: &[],
        timeline: &[],
        chart: None,
        table: None,
        footnotes: &[],
        background: Some("cover"),
        media: Some(Media::Stack(&[
            Figure { src: "assets/followup-qr.webp", caption: "フォローアップ窓口はこちら" },
        ])),
    },
];

pub fn chapter_content(id: &str) -> Option<&'static ChapterContent> {
    CHAPTER_CONTENTS.iter().find(|c| c.id == id)
}

pub fn minutes_for(id: &str) -> Option<u32> {
    TIMINGS.iter().find(|(section, _)| *section == id).map(|(_, m)| *m)
}

/// Short display label for a section id, used by the chapter index and HUD.
pub fn section_label(id: &str) -> &'static str {
    if let Some(chapter) = CHAPTERS.iter().find(|c| c.id == id) {
        return chapter.title;
    }
    match id {
        "top" => "トップ",
        "highlights" => "ハイライト",
        "program" => "プログラム",
        "voices" => "導入の声",
        "speakers" => "講師",
        "chapters" => "チャプター",
        "showcase" => "ショーケース",
        "resources" => "資料・申込",
        _ => "",
    }
}

/// Presenter notes for a section, with a placeholder when none are curated.
pub fn notes_for(id: &str) -> &'static str {
    match chapter_content(id) {
        Some(content) if !content.notes.is_empty() => content.notes,
        _ => "（このセクションのメモはありません）",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_nonempty_and_unique() {
        assert!(!SECTION_IDS.is_empty());
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
    }

    #[test]
    fn every_chapter_has_content_and_a_section() {
        for chapter in CHAPTERS {
            let content = chapter_content(chapter.id)
                .unwrap_or_else(|| panic!("missing content for {}", chapter.id));
            assert_eq!(content.title, chapter.title);
            assert!(SECTION_IDS.contains(&chapter.id));
        }
    }

    #[test]
    fn chapter_numbers_are_sequential() {
        for (i, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.number as usize, i + 1);
        }
    }

    #[test]
    fn timings_cover_all_chapters() {
        for chapter in CHAPTERS {
            assert!(minutes_for(chapter.id).is_some(), "no timing for {}", chapter.id);
        }
        assert_eq!(minutes_for("nonexistent"), None);
    }

    #[test]
    fn agenda_and_chapters_stay_aligned() {
        assert_eq!(AGENDA.len(), CHAPTERS.len());
        for (block, chapter) in AGENDA.iter().zip(CHAPTERS) {
            assert_eq!(block.title, chapter.title);
        }
    }

    #[test]
    fn deck_has_cover_and_unique_ids() {
        assert!(!SLIDES.is_empty());
        assert_eq!(SLIDES[0].background, Some("cover"));
        let unique: HashSet<_> = SLIDES.iter().map(|s| s.id).collect();
        assert_eq!(unique.len(), SLIDES.len());
    }

    #[test]
    fn slide_chapter_links_resolve() {
        for slide in SLIDES {
            if let Some(chapter_id) = slide.chapter {
                assert!(chapter_content(chapter_id).is_some(), "{} points at {}", slide.id, chapter_id);
            }
        }
        assert!(SLIDES.iter().any(|s| matches!(s.media, Some(Media::Compare { .. }))));
    }

    #[test]
    fn every_section_id_has_a_label() {
        for id in SECTION_IDS {
            assert!(!section_label(id).is_empty(), "no label for {id}");
        }
    }

    #[test]
    fn notes_fall_back_to_placeholder() {
        assert_eq!(notes_for("ch-01"), chapter_content("ch-01").unwrap().notes);
        assert!(notes_for("top").contains("メモはありません"));
    }
}
