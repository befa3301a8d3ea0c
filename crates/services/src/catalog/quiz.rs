use journey_core::model::QuizQuestionDraft;

pub(super) fn question_drafts() -> Vec<QuizQuestionDraft> {
    vec![
        QuizQuestionDraft::new(
            "データの正規化の主な目的は何ですか？",
            [
                "データの見た目を良くする",
                "データの重複を減らし、一貫性を保つ",
                "データ量を増やす",
                "データの計算速度を上げる",
            ],
            "データの重複を減らし、一貫性を保つ",
            "データの正規化の主な目的は、データの重複を減らし、一貫性を保つことです。これにより、データの整合性が向上し、更新時の矛盾を防ぐことができます。また、データの効率的な管理と検索が可能になります。",
        ),
        QuizQuestionDraft::new(
            "第1正規形の主な特徴は何ですか？",
            [
                "1つのセルに複数の情報を入れる",
                "1つのセルには1つの情報だけを入れる",
                "すべてのデータを1つのテーブルにまとめる",
                "データを常にアルファベット順に並べる",
            ],
            "1つのセルには1つの情報だけを入れる",
            "第1正規形の主な特徴は、1つのセルには1つの情報だけを入れることです。これにより、データの検索や更新が容易になり、データの一貫性が向上します。例えば、住所情報を「都道府県」「市区町村」「番地」に分けて保存することで、より柔軟なデータ操作が可能になります。",
        ),
        QuizQuestionDraft::new(
            "総務部で社員の勤怠管理をする場合、第2正規形を適用するとどのようになりますか？",
            [
                "すべての情報を1つの大きなテーブルに入れる",
                "社員情報と勤怠情報を別々のテーブルに分ける",
                "各社員ごとに別々のテーブルを作成する",
                "勤怠情報を日付ごとに別々のテーブルに分ける",
            ],
            "社員情報と勤怠情報を別々のテーブルに分ける",
            "第2正規形を適用する場合、社員情報（社員ID、氏名、部署など）と勤怠情報（出勤日、勤務時間など）を別々のテーブルに分けます。これにより、社員情報の更新と勤怠情報の記録を独立して行うことができ、データの重複を減らすことができます。社員IDを使って両テーブルを関連付けることで、必要な情報を柔軟に取得できます。",
        ),
        QuizQuestionDraft::new(
            "第3正規形を適用すると、どのような利点がありますか？",
            [
                "データ入力が簡単になる",
                "データの検索速度が上がる",
                "非キー列同士の依存関係がなくなり、データの一貫性が向上する",
                "テーブルの数が減少する",
            ],
            "非キー列同士の依存関係がなくなり、データの一貫性が向上する",
            "第3正規形を適用すると、非キー列同士の依存関係がなくなり、データの一貫性が向上します。これにより、データの更新や削除時に矛盾が生じるリスクが減少し、データベース全体の整合性が保たれやすくなります。例えば、部署情報を別テーブルに分けることで、部署名や所在地の変更を一箇所で行うだけで済むようになります。",
        ),
        QuizQuestionDraft::new(
            "総務部で社員の給与計算をする際、どのようにデータを正規化すると効率的ですか？",
            [
                "すべての給与情報を1つの大きなテーブルに入れる",
                "社員ごとに別々のテーブルを作成する",
                "基本給と手当を別々のテーブルに分け、社員IDで関連付ける",
                "毎月の給与計算結果を1つのセルにまとめて保存する",
            ],
            "基本給と手当を別々のテーブルに分け、社員IDで関連付ける",
            "給与計算を効率的に行うには、基本給と手当を別々のテーブルに分け、社員IDで関連付けるのが効果的です。これにより、基本給の変更や手当の追加・削除を柔軟に行うことができます。また、給与計算の際には必要な情報を各テーブルから取得して計算を行うことで、データの一貫性を保ちながら効率的な処理が可能になります。",
        ),
    ]
}
