//! The built-in "StudyMate AI" business-plan deck.

use crate::style::{RgbColor, SlideStyle};
use crate::types::{BulletItem, Deck, Slide};

/// Style used by the StudyMate AI deck: widescreen, 42pt titles.
pub fn studymate_style() -> SlideStyle {
    SlideStyle {
        font_name: "DejaVu Sans".to_string(),
        title_size: 42,
        bullet_size: 24,
        accent_color: RgbColor::new(0x1f, 0x77, 0xb4),
        widescreen: true,
    }
}

/// Build the eight-slide StudyMate AI deck.
pub fn studymate_deck() -> Deck {
    use BulletItem as B;

    let mut deck = Deck::new(studymate_style());

    deck.add_slide(Slide::new(
        "StudyMate AI – Trợ lý học tập thông minh",
        ["Ý tưởng khởi nghiệp CNTT"],
    ));

    deck.add_slide(Slide::new(
        "1. Ý tưởng khởi nghiệp",
        [
            B::from("Tên dự án: StudyMate AI"),
            B::from("Sản phẩm: Ứng dụng mobile & web giúp sinh viên học tập thông minh bằng AI"),
            B::group(
                "Lý do chọn ý tưởng:",
                [
                    "Khó quản lý thời gian học, làm bài tập, ghi nhớ",
                    "Học online nhưng thiếu công cụ cá nhân hóa",
                ],
            ),
            B::group(
                "Điểm khác biệt:",
                [
                    "AI gợi ý lộ trình học cá nhân",
                    "Tóm tắt bài giảng, gợi ý flashcard, tạo quiz",
                    "Chatbot giải thích kiến thức như gia sư ảo",
                ],
            ),
        ],
    ));

    deck.add_slide(Slide::new(
        "2. Khách hàng mục tiêu & vấn đề",
        [
            B::group(
                "Chân dung khách hàng:",
                ["Sinh viên đại học, cao đẳng", "Học sinh THPT chuẩn bị thi"],
            ),
            B::group(
                "Nhu cầu/vấn đề:",
                [
                    "Khó quản lý lịch học, bài tập",
                    "Thiếu công cụ tóm tắt nhanh, học hiệu quả",
                ],
            ),
            B::from("Minh chứng: 80% sinh viên muốn app tóm tắt và ôn tập nhanh"),
        ],
    ));

    deck.add_slide(Slide::new(
        "3. Giải pháp & MVP",
        [
            B::group(
                "Giải pháp – StudyMate AI hỗ trợ:",
                [
                    "Tải PDF/Word → AI tóm tắt bullet points",
                    "Sinh flashcard & quiz ôn tập tự động",
                    "Chatbot hỏi–đáp như trợ giảng ảo",
                    "Quản lý lịch học, nhắc deadline",
                ],
            ),
            B::from("MVP: Bản web demo với Tóm tắt tài liệu & Tạo quiz"),
            B::from("Đo lường: số lượt tải, giờ học trung bình/ngày"),
        ],
    ));

    deck.add_slide(Slide::new(
        "4. Business Model Canvas – StudyMate AI",
        [
            B::group(
                "1) Đối tác chính (Key Partners):",
                [
                    "OpenAI, HuggingFace, Google AI (AI/ML)",
                    "Trường đại học, trung tâm giáo dục",
                    "Đối tác thanh toán: Momo, ZaloPay, VNPay",
                    "Startup EdTech, nhà xuất bản tài liệu",
                ],
            ),
            B::group(
                "2) Hoạt động chính (Key Activities):",
                [
                    "Phát triển & duy trì app (mobile/web)",
                    "Xây dựng/huấn luyện mô hình AI (tóm tắt, quiz, chatbot)",
                    "Marketing online/offline tại trường học",
                    "CSKH & hỗ trợ kỹ thuật",
                ],
            ),
            B::group(
                "3) Giá trị cốt lõi (Value Proposition):",
                [
                    "Học thông minh hơn, tiết kiệm thời gian",
                    "Cá nhân hóa lộ trình, ôn tập hiệu quả",
                    "Trợ lý ảo AI: tóm tắt, quiz, flashcard",
                    "Khác biệt: tự động hóa – cá nhân hóa – tương tác như gia sư",
                ],
            ),
            B::group(
                "4) Quan hệ khách hàng (Customer Relationships):",
                [
                    "Miễn phí + nâng cấp Premium",
                    "Hỗ trợ chatbot 24/7, cộng đồng Facebook/Zalo",
                    "Gamification: tích điểm đổi thưởng",
                    "Email/SMS nhắc lịch học, deadline",
                ],
            ),
            B::group(
                "5) Phân khúc khách hàng (Customer Segments):",
                [
                    "Sinh viên đại học, cao đẳng",
                    "Học sinh THPT chuẩn bị thi",
                    "Người đi làm muốn học thêm",
                ],
            ),
            B::group(
                "6) Kênh phân phối (Channels):",
                [
                    "App Store, Google Play",
                    "Website chính thức",
                    "MXH: Facebook, TikTok, YouTube",
                    "Hợp tác CLB sinh viên, trung tâm gia sư",
                ],
            ),
            B::group(
                "7) Nguồn lực chính (Key Resources):",
                [
                    "Đội ngũ dev & chuyên gia AI",
                    "Hạ tầng cloud: AWS, GCP",
                    "Dữ liệu học tập (giáo trình, đề thi)",
                    "Vốn khởi nghiệp/đầu tư",
                ],
            ),
            B::group(
                "8) Cơ cấu chi phí (Cost Structure):",
                [
                    "Phát triển ứng dụng & server cloud",
                    "Nhân sự: dev, AI, marketing",
                    "Marketing & quảng cáo",
                    "Bản quyền AI/API",
                ],
            ),
            B::group(
                "9) Dòng doanh thu (Revenue Streams):",
                [
                    "Gói Premium: 99k/tháng (AI nâng cao, flashcard không giới hạn)",
                    "Quảng cáo (phiên bản free)",
                    "B2B: Giải pháp AI cho trường học/trung tâm",
                    "Khóa học mini tích hợp trong app",
                ],
            ),
        ],
    ));

    deck.add_slide(Slide::new(
        "5. Tiếp cận thị trường & marketing",
        [
            B::group("Kênh phân phối:", ["App Store, Google Play, website"]),
            B::group(
                "Marketing:",
                [
                    "Hợp tác CLB sinh viên, phát demo miễn phí",
                    "Quảng cáo Facebook, TikTok, YouTube",
                    "Mini game: Ôn thi cùng AI",
                ],
            ),
        ],
    ));

    deck.add_slide(Slide::new(
        "6. Phân tích tài chính sơ bộ",
        [
            B::group(
                "Chi phí ban đầu:",
                [
                    "Phát triển ứng dụng: 50 triệu",
                    "Marketing thử nghiệm: 20 triệu",
                ],
            ),
            B::from("Nguồn thu: Gói Premium & quảng cáo trong app"),
            B::group(
                "Dự kiến lợi nhuận:",
                [
                    "1.000 người dùng trả phí → 99 triệu/tháng",
                    "Hòa vốn sau 6 tháng",
                ],
            ),
        ],
    ));

    deck.add_slide(Slide::new(
        "7. Kế hoạch phát triển 1 năm",
        [
            "Q1: Ra mắt MVP, test với 100 sinh viên",
            "Q2: Ra mắt trên Google Play, đạt 10.000 user",
            "Q3: Nâng cấp AI Chatbot theo môn học",
            "Q4: Hợp tác trường học, mở rộng bản tiếng Anh",
        ],
    ));

    deck
}
