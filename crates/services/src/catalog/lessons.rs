use journey_core::model::{Accent, Block, Cell, ListItem, PageDraft, Table};

pub(super) fn lesson_drafts() -> Vec<PageDraft> {
    vec![
        introduction(),
        first_normal_form(),
        second_normal_form(),
        third_normal_form(),
        summary(),
    ]
}

fn introduction() -> PageDraft {
    PageDraft::new(
        "データの正規化とは？",
        vec![
            Block::paragraph(
                "データの正規化は、データベースの設計を改善し、データの重複を減らし、一貫性を保ち、データの整合性を高めるために用いられる技術です。",
            ),
            Block::heading("なぜ正規化が重要なのか？"),
            Block::bullets([
                ListItem::labeled(
                    "冗長性の削減：",
                    Accent::Blue,
                    "同じデータが複数回入力されることを防ぎます。",
                ),
                ListItem::labeled(
                    "整合性の向上：",
                    Accent::Green,
                    "データの更新や削除時に、矛盾が発生する可能性を減らします。",
                ),
                ListItem::labeled(
                    "効率性の向上：",
                    Accent::Purple,
                    "データの検索や処理を効率化します。",
                ),
            ]),
        ],
    )
}

fn first_normal_form() -> PageDraft {
    let before = Table::new(["従業員ID", "名前", "出発と到着地", "日付", "費用"])
        .row([
            Cell::plain("101"),
            Cell::plain("田中太郎"),
            Cell::problem("東京→大阪"),
            Cell::plain("2024/01/05"),
            Cell::plain("5,000円"),
        ])
        .row([
            Cell::plain("102"),
            Cell::plain("佐藤花子"),
            Cell::problem("名古屋→福岡"),
            Cell::plain("2024/02/10"),
            Cell::plain("12,000円"),
        ]);
    let after = Table::new(["従業員ID", "名前", "出発地", "到着地", "日付", "費用"])
        .row([
            Cell::plain("101"),
            Cell::plain("田中太郎"),
            Cell::resolved("東京"),
            Cell::resolved("大阪"),
            Cell::plain("2024/01/05"),
            Cell::plain("5,000円"),
        ])
        .row([
            Cell::plain("102"),
            Cell::plain("佐藤花子"),
            Cell::resolved("名古屋"),
            Cell::resolved("福岡"),
            Cell::plain("2024/02/10"),
            Cell::plain("12,000円"),
        ]);

    PageDraft::new(
        "第1正規形",
        vec![
            Block::lead("1つのセルには1つの情報だけを入れる"),
            Block::comparison([before], [after]),
            Block::paragraph(
                "第1正規形では、各セルに1つの値だけが含まれるようにデータを分割します。これにより、データの検索や更新が容易になります。",
            ),
        ],
    )
}

fn second_normal_form() -> PageDraft {
    let before = Table::new([
        "出張ID",
        "従業員ID",
        "従業員名",
        "部署",
        "出発地",
        "到着地",
        "出発日",
        "宿泊費",
    ])
    .row([
        Cell::plain("001"),
        Cell::plain("101"),
        Cell::problem("田中太郎"),
        Cell::problem("営業部"),
        Cell::plain("東京"),
        Cell::plain("大阪"),
        Cell::plain("2024/01/05"),
        Cell::plain("8000"),
    ])
    .row([
        Cell::plain("002"),
        Cell::plain("102"),
        Cell::problem("佐藤花子"),
        Cell::problem("総務部"),
        Cell::plain("名古屋"),
        Cell::plain("福岡"),
        Cell::plain("2024/02/10"),
        Cell::plain("12000"),
    ]);

    let employees = Table::new(["従業員ID", "従業員名", "部署"])
        .with_caption("従業員テーブル")
        .row([
            Cell::plain("101"),
            Cell::resolved("田中太郎"),
            Cell::resolved("営業部"),
        ])
        .row([
            Cell::plain("102"),
            Cell::resolved("佐藤花子"),
            Cell::resolved("総務部"),
        ]);
    let trips = Table::new(["出張ID", "従業員ID", "出発地", "到着地", "出発日", "宿泊費"])
        .with_caption("出張テーブル")
        .row(["001", "101", "東京", "大阪", "2024/01/05", "8000"])
        .row(["002", "102", "名古屋", "福岡", "2024/02/10", "12000"]);

    PageDraft::new(
        "第2正規形",
        vec![
            Block::lead("部分的に依存しているデータを取り除き、情報を別のテーブルに分割する"),
            Block::comparison([before], [employees, trips]),
            Block::paragraph(
                "第2正規形では、部分的な依存関係を持つデータを別のテーブルに分割します。これにより、データの重複を減らし、更新時の矛盾を防ぎます。",
            ),
        ],
    )
}

fn third_normal_form() -> PageDraft {
    let before = Table::new(["従業員ID", "従業員名", "部署ID", "部署名", "部署所在地"])
        .row([
            Cell::plain("101"),
            Cell::plain("田中太郎"),
            Cell::plain("D01"),
            Cell::problem("営業部"),
            Cell::problem("東京"),
        ])
        .row([
            Cell::plain("102"),
            Cell::plain("佐藤花子"),
            Cell::plain("D02"),
            Cell::problem("総務部"),
            Cell::problem("大阪"),
        ])
        .row([
            Cell::plain("103"),
            Cell::plain("鈴木一郎"),
            Cell::plain("D01"),
            Cell::problem("営業部"),
            Cell::problem("東京"),
        ]);

    let employees = Table::new(["従業員ID", "従業員名", "部署ID"])
        .with_caption("従業員テーブル")
        .row(["101", "田中太郎", "D01"])
        .row(["102", "佐藤花子", "D02"])
        .row(["103", "鈴木一郎", "D01"]);
    let departments = Table::new(["部署ID", "部署名", "部署所在地"])
        .with_caption("部署テーブル")
        .row([
            Cell::plain("D01"),
            Cell::resolved("営業部"),
            Cell::resolved("東京"),
        ])
        .row([
            Cell::plain("D02"),
            Cell::resolved("総務部"),
            Cell::resolved("大阪"),
        ]);

    PageDraft::new(
        "第3正規形",
        vec![
            Block::lead("各列が独立したデータを持つようにする"),
            Block::comparison([before], [employees, departments]),
            Block::paragraph(
                "第3正規形では、非キー列同士の依存関係を取り除きます。これにより、データの一貫性が向上し、更新時の異常を防ぎます。",
            ),
        ],
    )
}

fn summary() -> PageDraft {
    PageDraft::new(
        "まとめ",
        vec![
            Block::paragraph("データの正規化は、以下の3つのステップで行います："),
            Block::numbered([
                ListItem::labeled(
                    "第1正規形：",
                    Accent::Blue,
                    "1つのセルには1つの情報だけを入れる",
                ),
                ListItem::labeled(
                    "第2正規形：",
                    Accent::Green,
                    "部分的に依存しているデータを取り除き、情報を別のテーブルに分割する",
                ),
                ListItem::labeled(
                    "第3正規形：",
                    Accent::Purple,
                    "各列が独立したデータを持つようにする",
                ),
            ]),
            Block::paragraph(
                "これらのステップを踏むことで、データの重複を減らし、一貫性を保ち、データの整合性を高めることができます。",
            ),
        ],
    )
}
