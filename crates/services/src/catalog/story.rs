use journey_core::model::{Accent, Block, DialogueLine, ListItem, PageDraft, Tone};

const KAI: &str = "カイ";
const RIKU: &str = "リク";
const KING: &str = "エリシア王";

pub(super) fn slide_drafts() -> Vec<PageDraft> {
    vec![
        title(),
        characters(),
        prologue(),
        chapter_one(),
        chapter_two(),
        chapter_three(),
        epilogue(),
        recap(),
    ]
}

fn title() -> PageDraft {
    PageDraft::new(
        "タイトル",
        vec![Block::title(
            "「データ整理の旅」 〜旅費精算のエクセル王国を救え！〜",
        )],
    )
}

fn characters() -> PageDraft {
    PageDraft::new(
        "登場人物",
        vec![
            Block::character(
                KAI,
                "総務課で働く新米社員。整理整頓は苦手だが、使命感があり、成長の可能性を秘めた青年。",
            ),
            Block::character(
                RIKU,
                "カイの先輩で、Excelの達人。落ち着いた性格で、カイを支えながら導くメンター。人々が整理整頓を通じて成長することを信じている。",
            ),
            Block::character(
                KING,
                "エクセル王国の王様。王国を守るため、カイとリクに全てを託す。",
            ),
        ],
    )
}

fn prologue() -> PageDraft {
    PageDraft::new(
        "プロローグ",
        vec![
            Block::image("/images/Prologue.png?height=200&width=400", "エクセル王国の風景"),
            Block::paragraph(
                "エクセル王国はかつて、すべてが整った美しい国だった。だが、時が経つにつれて、データの混乱が王国全体に広がっていった。特に「旅費精算書」は複雑さを増し、誰もがその整理に手を焼いていた。",
            ),
            Block::paragraph(
                "エリシア王はついに、一人の若者に助けを求める決意をした。「頼む、カイ。この王国を救ってほしい。」そう告げられた総務課の新米社員カイは、使命を胸に王国の未来を守ることを決意した。",
            ),
        ],
    )
}

fn chapter_one() -> PageDraft {
    PageDraft::new(
        "チャプター1: 「第一の試練 〜繰り返しの迷宮〜」",
        vec![
            Block::image("/images/Chapter1.png", "繰り返しの迷宮"),
            Block::paragraph(
                "カイとリクが最初に辿り着いたのは、「繰り返しの迷宮」だった。迷宮の壁には、無数に刻まれた「東京, 東京, 東京…」や「3000円, 3000円, 3000円…」といった文字が何度も繰り返されている。",
            ),
            Block::dialogue(
                Tone::Blue,
                [
                    DialogueLine::new(KAI, "\"なんで、同じ情報がこんなにたくさん書かれているんだろう…？\""),
                    DialogueLine::new(
                        RIKU,
                        "\"カイ、迷宮が混乱しているのは、一つの場所にたくさんの情報を詰め込みすぎているからさ。一度、情報を一つずつ整理してみよう。\"",
                    ),
                ],
            ),
            Block::paragraph(
                "カイはリクの言葉に従い、表の情報を一つ一つ取り出して整理し始めた。すると、迷宮の壁が徐々に透けていき、道が現れた。",
            ),
            Block::dialogue(
                Tone::Green,
                [
                    DialogueLine::new(KAI, "\"すごい…！これで進める！\""),
                    DialogueLine::new(
                        RIKU,
                        "\"情報を一つずつ分けて整理するだけで、こんなにも道が見えてくるんだよ\"",
                    ),
                ],
            ),
        ],
    )
}

fn chapter_two() -> PageDraft {
    PageDraft::new(
        "チャプター2: 「第二の試練 〜重複の洞窟〜」",
        vec![
            Block::image("/images/Chapter2.png?height=200&width=400", "重複の洞窟"),
            Block::paragraph(
                "次に二人が訪れたのは、「重複の洞窟」。洞窟内には、同じ社員の名前や部署が繰り返し書かれ、どれが最新の情報かがわからなくなっていた。",
            ),
            Block::dialogue(
                Tone::Yellow,
                [
                    DialogueLine::new(KAI, "\"これじゃ、何が正しいのかわからないよ…\""),
                    DialogueLine::new(
                        RIKU,
                        "\"カイ、同じ情報がいろんな場所にあると、混乱が起きるんだ。だから、共通の情報は一箇所にまとめておくんだよ。\"",
                    ),
                ],
            ),
            Block::paragraph(
                "カイは社員ごとの情報を一つのリストにまとめ、重複した情報を分けて整理した。すると、洞窟の壁に書かれた文字が一つずつ消え、明るい光が差し込んできた。",
            ),
            Block::dialogue(
                Tone::Green,
                [
                    DialogueLine::new(KAI, "\"これで…整理できたかも！\""),
                    DialogueLine::new(
                        RIKU,
                        "\"一つにまとめることで、迷わずに進めるんだ。次は、もっと難しい場所が待っているよ\"",
                    ),
                ],
            ),
        ],
    )
}

fn chapter_three() -> PageDraft {
    PageDraft::new(
        "チャプター3: 「第三の試練 〜依存の森〜」",
        vec![
            Block::image("/images/Chapter3.png?height=200&width=400", "依存の森"),
            Block::paragraph(
                "最後に二人が足を踏み入れたのは、「依存の森」。森の中では、情報があちこちに分散し、どの情報が正しいのかがわからなくなっていた。特に、部署ごとの責任者情報が入り乱れ、迷路のような状態になっていた。",
            ),
            Block::dialogue(
                Tone::Purple,
                [
                    DialogueLine::new(KAI, "\"どこに何があるのか全然わからない…\""),
                    DialogueLine::new(
                        RIKU,
                        "\"カイ、この森は情報があちこちに散らばっているから迷いやすいんだ。それぞれの情報を、関連付けしながら整理し直してみよう。\"",
                    ),
                ],
            ),
            Block::paragraph(
                "カイはリクの言葉に従い、責任者の情報を一つのリストにまとめ、それぞれの部署とリンクさせた。すると、森の木々がまっすぐに整列し、明るい光が差し込んできた。",
            ),
            Block::dialogue(
                Tone::Green,
                [
                    DialogueLine::new(KAI, "\"これで…道が見えた…！\""),
                    DialogueLine::new(RIKU, "\"ほら、整理整頓することで道が開けるんだよ\""),
                ],
            ),
        ],
    )
}

fn epilogue() -> PageDraft {
    PageDraft::new(
        "エピローグ: 「エクセル王国の復興」",
        vec![
            Block::image("/images/Epilogue.png?height=200&width=400", "復興したエクセル王国"),
            Block::paragraph(
                "3つの試練を乗り越えたカイは、エリシア王に報告をするために城へ戻った。エリシア王は涙を流しながら感謝の言葉を述べた。",
            ),
            Block::dialogue(
                Tone::Pink,
                [
                    DialogueLine::new(KING, "\"カイ、ありがとう。この国はあなたのおかげで救われた。\""),
                    DialogueLine::new(
                        RIKU,
                        "\"これからは君が、他の人たちを導いていくんだ。自分が学んだことを、他の人にも教えてあげよう。\"",
                    ),
                ],
            ),
            Block::paragraph("カイは深く頷いた。その顔には以前の迷いがなく、未来への希望が見えた。"),
        ],
    )
}

fn recap() -> PageDraft {
    PageDraft::new(
        "ふりかえり: 「三つの試練と正規化」",
        vec![
            Block::paragraph("カイが乗り越えた三つの試練は、データの正規化の三つのステップそのものだった。"),
            Block::numbered([
                ListItem::labeled(
                    "繰り返しの迷宮：",
                    Accent::Blue,
                    "第1正規形。1つのセルには1つの情報だけを入れる。",
                ),
                ListItem::labeled(
                    "重複の洞窟：",
                    Accent::Green,
                    "第2正規形。部分的に依存しているデータを別のテーブルに分ける。",
                ),
                ListItem::labeled(
                    "依存の森：",
                    Accent::Purple,
                    "第3正規形。非キー列同士の依存関係を取り除く。",
                ),
            ]),
            Block::dialogue(
                Tone::Blue,
                [
                    DialogueLine::new(RIKU, "\"さあ、学習コンテンツに戻って、理解度チェックに挑戦してみよう。\""),
                    DialogueLine::new(KAI, "\"はい！やってみます！\""),
                ],
            ),
        ],
    )
}
