//! Starter posts shipped with the marketing site, newest first.

use chrono::NaiveDate;

use spire_core::domain::{NewPost, Post};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// The three articles the blog launches with.
pub fn starter_posts() -> Vec<Post> {
    vec![
        Post::new(NewPost {
            title: "The Future of Digital Marketing: Trends to Watch in 2024".to_string(),
            excerpt: "Discover the latest digital marketing trends that will shape the industry in 2024 and beyond.".to_string(),
            content: r#"Digital marketing continues to evolve at a rapid pace, and staying ahead of the curve is crucial for businesses looking to maintain their competitive edge. As we move through 2024, several key trends are emerging that will fundamentally reshape how brands connect with their audiences.

**Artificial Intelligence and Machine Learning**

AI is no longer a futuristic concept – it's here and transforming marketing strategies. From predictive analytics to personalized content creation, AI is enabling marketers to deliver more relevant experiences at scale. Machine learning algorithms can now analyze vast amounts of customer data to predict behavior, optimize ad spend, and automatically adjust campaigns in real-time.

**Voice Search Optimization**

With the proliferation of smart speakers and voice assistants, voice search is becoming increasingly important. Marketers need to optimize their content for conversational queries and long-tail keywords that people use when speaking rather than typing.

**Privacy-First Marketing**

As privacy regulations become more stringent and consumers become more conscious about their data, marketers must adapt to a privacy-first world. This means focusing on first-party data collection and building trust through transparent data practices.

**Video Content Dominance**

Video content continues to dominate social media platforms and search results. Short-form videos, live streaming, and interactive video content are becoming essential components of successful marketing strategies.

The key to success in this evolving landscape is to remain agile, test new approaches, and always keep the customer at the center of your strategy."#.to_string(),
            author: "Sarah Johnson".to_string(),
            date: date(2024, 1, 15),
            image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            tags: vec![
                "Digital Marketing".to_string(),
                "Trends".to_string(),
                "AI".to_string(),
                "Strategy".to_string(),
            ],
            read_time: 8,
        }),
        Post::new(NewPost {
            title: "Building Brand Authority Through Content Marketing".to_string(),
            excerpt: "Learn how to establish your brand as an industry leader through strategic content marketing.".to_string(),
            content: r#"Content marketing has evolved from a nice-to-have to an essential component of any successful marketing strategy. In today's saturated digital landscape, brands that consistently deliver valuable, relevant content are the ones that build lasting relationships with their audiences and establish themselves as industry authorities.

**Understanding Your Audience**

The foundation of effective content marketing lies in deeply understanding your audience. This goes beyond basic demographics to include psychographics, pain points, preferences, and behaviors. Create detailed buyer personas and use them to guide your content creation process.

**Consistency is Key**

Building brand authority doesn't happen overnight. It requires consistent effort and a long-term commitment to providing value. Develop a content calendar and stick to it, ensuring that you're regularly publishing high-quality content across all your channels.

**Diversify Your Content Types**

Different people consume content in different ways. Some prefer reading detailed blog posts, others enjoy watching videos, and many like listening to podcasts during their commute. Diversify your content portfolio to reach your audience wherever they are.

**Measure and Optimize**

Track the performance of your content using analytics tools. Look at metrics like engagement rates, time on page, social shares, and conversion rates to understand what resonates with your audience and optimize accordingly.

Remember, content marketing is not about selling – it's about providing value and building trust. When you consistently deliver valuable content, sales will naturally follow."#.to_string(),
            author: "Michael Chen".to_string(),
            date: date(2024, 1, 10),
            image: "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            tags: vec![
                "Content Marketing".to_string(),
                "Branding".to_string(),
                "Authority".to_string(),
                "Strategy".to_string(),
            ],
            read_time: 6,
        }),
        Post::new(NewPost {
            title: "Social Media ROI: Measuring What Matters".to_string(),
            excerpt: "Understand how to properly measure and improve your social media return on investment.".to_string(),
            content: r#"Social media marketing can feel like a black box when it comes to measuring ROI. Many businesses struggle to connect their social media efforts to tangible business outcomes. However, with the right approach and metrics, you can clearly demonstrate the value of your social media investments.

**Setting Clear Objectives**

Before you can measure ROI, you need to define what success looks like for your business. Are you looking to increase brand awareness, generate leads, drive sales, or improve customer service? Each objective requires different metrics and measurement approaches.

**Beyond Vanity Metrics**

While likes, follows, and shares are easy to track, they don't necessarily translate to business value. Focus on metrics that directly correlate with your business objectives, such as click-through rates, conversion rates, cost per acquisition, and customer lifetime value.

**Attribution Modeling**

Social media often plays a role in the customer journey without being the final touchpoint before conversion. Implement proper attribution modeling to understand how social media contributes to your overall marketing funnel.

**Tools and Tracking**

Utilize social media analytics tools, Google Analytics, and marketing automation platforms to track the customer journey from social media to conversion. Set up proper tracking and UTM parameters to accurately measure the impact of your social media efforts.

**Calculating True ROI**

To calculate ROI, you need to consider both the direct costs (ad spend, tools, salaries) and the indirect costs (time, opportunity cost) of your social media efforts. Compare these costs to the revenue generated from social media-driven conversions.

The key is to be patient and consistent in your measurement approach, as social media ROI often compounds over time."#.to_string(),
            author: "Emma Rodriguez".to_string(),
            date: date(2024, 1, 5),
            image: "https://images.pexels.com/photos/147413/twitter-facebook-together-exchange-of-information-147413.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            tags: vec![
                "Social Media".to_string(),
                "ROI".to_string(),
                "Analytics".to_string(),
                "Measurement".to_string(),
            ],
            read_time: 7,
        }),
    ]
}
