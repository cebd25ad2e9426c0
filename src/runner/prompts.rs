//! Built-in test prompts

/// Deliberately padded image request, the main optimization target
pub const VERBOSE_IMAGE_PROMPT: &str = "I would be extremely grateful if you could please kindly create for me, if it would not be too much trouble, a truly magnificent, absolutely stunning, incredibly beautiful, exceptionally high-quality, professional-grade, and completely photorealistic digital image of a breathtaking mountain landscape with crystal clear, absolutely pristine, and beautifully reflective blue lakes, majestic, awe-inspiring snow-capped mountain peaks, and absolutely spectacular dramatic golden hour lighting that would make this image absolutely perfect for use as a desktop wallpaper. The resolution should be 8K and the style should be professional photography with perfect cinematic composition principles with impeccable rule of thirds. This image should be shot with a high-end DSLR camera and I sincerely appreciate your time and effort in creating this masterpiece for me.";

/// Wordy research request, used for the strategy sweep
pub const MARKET_ANALYSIS_PROMPT: &str = "Please write a comprehensive and detailed analysis of the current market trends in the artificial intelligence industry, including but not limited to machine learning, deep learning, natural language processing, computer vision, and robotics. I would really appreciate it if you could provide specific examples, statistical data, and expert insights that would be extremely valuable for my research project. Thank you so much for your assistance.";

/// Already terse; little to gain
pub const SHORT_PROMPT: &str = "Create a beautiful sunset landscape";

/// Prompts in the order `run_all` consumes them
pub fn default_prompts() -> Vec<&'static str> {
    vec![VERBOSE_IMAGE_PROMPT, MARKET_ANALYSIS_PROMPT, SHORT_PROMPT]
}
